use std::sync::Arc;

use ecoscan::aggregator::{Aggregator, ID_AND_SOURCE_REQUIRED, INVALID_SOURCE, QUERY_REQUIRED};
use ecoscan::config::DEFAULT_USER_AGENT;
use ecoscan::data_models::SourceName;
use ecoscan::error::{AdapterError, EcoScanError};
use ecoscan::sources::{SiteSource, Source, ebay};

mod common;
use common::{MockSource, StaticFetcher, listing};

fn aggregator_of(sources: &[Arc<MockSource>]) -> Aggregator {
    Aggregator::new(
        sources
            .iter()
            .map(|s| s.clone() as Arc<dyn Source>)
            .collect(),
    )
}

#[tokio::test]
async fn test_results_follow_configured_order_not_completion_order() {
    let amazon = Arc::new(
        MockSource::new(
            SourceName::Amazon,
            vec![listing("A1", "Organic Tote", 10.0), listing("A2", "Canvas Tote", 8.0)],
        )
        .with_delay(80),
    );
    let ebay = Arc::new(MockSource::new(SourceName::Ebay, vec![listing("E1", "Jute Rug", 30.0)]));
    let walmart = Arc::new(
        MockSource::new(SourceName::Walmart, vec![listing("W1", "Steel Bottle", 12.0)])
            .with_delay(20),
    );
    let aggregator = aggregator_of(&[amazon.clone(), ebay.clone(), walmart.clone()]);

    let products = aggregator.search_all("tote").await.unwrap();

    let tagged: Vec<(SourceName, &str)> = products
        .iter()
        .map(|p| (p.source, p.product.id.as_str()))
        .collect();
    assert_eq!(
        tagged,
        vec![
            (SourceName::Amazon, "A1"),
            (SourceName::Amazon, "A2"),
            (SourceName::Ebay, "E1"),
            (SourceName::Walmart, "W1"),
        ]
    );
    assert_eq!(amazon.search_calls(), 1);
    assert_eq!(ebay.search_calls(), 1);
    assert_eq!(walmart.search_calls(), 1);
}

#[tokio::test]
async fn test_sources_are_searched_concurrently() {
    let slow: Vec<Arc<MockSource>> = SourceName::ALL
        .into_iter()
        .map(|name| Arc::new(MockSource::new(name, vec![]).with_delay(200)))
        .collect();
    let aggregator = aggregator_of(&slow);

    let start = std::time::Instant::now();
    let products = aggregator.search_all("anything").await.unwrap();

    assert!(products.is_empty());
    // five sequential sleeps would take a full second
    assert!(start.elapsed() < std::time::Duration::from_millis(800));
}

#[tokio::test]
async fn test_empty_query_is_rejected_before_any_source_runs() {
    let amazon = Arc::new(MockSource::new(SourceName::Amazon, vec![listing("A1", "Tote", 1.0)]));
    let ebay = Arc::new(MockSource::new(SourceName::Ebay, vec![]));
    let aggregator = aggregator_of(&[amazon.clone(), ebay.clone()]);

    for query in ["", "   "] {
        match aggregator.search_all(query).await {
            Err(EcoScanError::Validation(message)) => assert_eq!(message, QUERY_REQUIRED),
            other => panic!("expected a validation error, got {:?}", other),
        }
    }
    assert_eq!(amazon.search_calls(), 0);
    assert_eq!(ebay.search_calls(), 0);
}

#[tokio::test]
async fn test_failing_adapter_does_not_affect_the_others() {
    let amazon = Arc::new(MockSource::new(SourceName::Amazon, vec![listing("A1", "Organic Tote", 10.0)]));
    let broken_fetcher = Arc::new(StaticFetcher::failing());
    let broken_ebay: Arc<dyn Source> =
        Arc::new(SiteSource::new(ebay::PROFILE, broken_fetcher.clone(), DEFAULT_USER_AGENT).unwrap());
    let snapdeal = Arc::new(MockSource::new(
        SourceName::Snapdeal,
        vec![listing("S1", "Bamboo Brush", 3.0), listing("S2", "Green Mug", 4.0)],
    ));
    let sources: Vec<Arc<dyn Source>> = vec![amazon.clone(), broken_ebay, snapdeal.clone()];
    let aggregator = Aggregator::new(sources);

    let products = aggregator.search_all("tote").await.unwrap();

    let tagged: Vec<(SourceName, &str)> = products
        .iter()
        .map(|p| (p.source, p.product.id.as_str()))
        .collect();
    assert_eq!(
        tagged,
        vec![
            (SourceName::Amazon, "A1"),
            (SourceName::Snapdeal, "S1"),
            (SourceName::Snapdeal, "S2"),
        ]
    );
    assert_eq!(broken_fetcher.calls(), 1);
}

#[tokio::test]
async fn test_panicking_adapter_fails_the_aggregation() {
    let amazon = Arc::new(MockSource::new(SourceName::Amazon, vec![listing("A1", "Tote", 10.0)]));
    let ebay = Arc::new(MockSource::new(SourceName::Ebay, vec![]).panicking());
    let aggregator = aggregator_of(&[amazon, ebay]);

    let result = aggregator.search_all("tote").await;

    assert!(matches!(result, Err(EcoScanError::Aggregation(_))));
}

#[tokio::test]
async fn test_summaries_keep_adapter_fields() {
    let walmart = Arc::new(MockSource::new(
        SourceName::Walmart,
        vec![listing("W1", "Eco Recycled Green Bag", 12.5)],
    ));
    let aggregator = aggregator_of(&[walmart]);

    let products = aggregator.search_all("bag").await.unwrap();

    assert_eq!(products.len(), 1);
    let bag = &products[0];
    assert_eq!(bag.source, SourceName::Walmart);
    assert_eq!(bag.product.title, "Eco Recycled Green Bag");
    assert_eq!(bag.product.price, Some(12.5));
    assert_eq!(bag.product.sustainability_level, 5);
}

#[tokio::test]
async fn test_details_route_to_the_named_source_only() {
    let amazon = Arc::new(MockSource::new(SourceName::Amazon, vec![]));
    let ebay = Arc::new(MockSource::new(SourceName::Ebay, vec![]));
    let aggregator = aggregator_of(&[amazon.clone(), ebay.clone()]);

    let detail = aggregator.details("1234567890", "ebay").await.unwrap();

    assert_eq!(detail.source, SourceName::Ebay);
    assert_eq!(detail.product.id, "1234567890");
    assert_eq!(ebay.detail_calls(), 1);
    assert_eq!(amazon.detail_calls(), 0);
    assert_eq!(amazon.search_calls() + ebay.search_calls(), 0);
}

#[tokio::test]
async fn test_details_reject_unknown_source_without_network() {
    let fetcher = Arc::new(StaticFetcher::failing());
    let amazon = Arc::new(MockSource::new(SourceName::Amazon, vec![]));
    let ebay: Arc<dyn Source> =
        Arc::new(SiteSource::new(ebay::PROFILE, fetcher.clone(), DEFAULT_USER_AGENT).unwrap());
    let sources: Vec<Arc<dyn Source>> = vec![amazon.clone(), ebay];
    let aggregator = Aggregator::new(sources);

    // "walmart" is a real source name but is not configured here
    for source in ["unknown-source", "Amazon", "walmart"] {
        match aggregator.details("B0TOTE001", source).await {
            Err(EcoScanError::Validation(message)) => assert_eq!(message, INVALID_SOURCE),
            other => panic!("expected invalid source for {source}, got {:?}", other),
        }
    }
    assert_eq!(amazon.detail_calls(), 0);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_details_require_id_and_source() {
    let amazon = Arc::new(MockSource::new(SourceName::Amazon, vec![]));
    let aggregator = aggregator_of(&[amazon.clone()]);

    for (id, source) in [("", "amazon"), ("B0TOTE001", ""), ("  ", " ")] {
        match aggregator.details(id, source).await {
            Err(EcoScanError::Validation(message)) => assert_eq!(message, ID_AND_SOURCE_REQUIRED),
            other => panic!("expected a validation error, got {:?}", other),
        }
    }
    assert_eq!(amazon.detail_calls(), 0);
}

#[tokio::test]
async fn test_details_errors_propagate_unchanged() {
    let amazon = Arc::new(MockSource::new(SourceName::Amazon, vec![]));
    let ebay = Arc::new(MockSource::new(SourceName::Ebay, vec![]).failing_details());
    let aggregator = aggregator_of(&[amazon.clone(), ebay.clone()]);

    let result = aggregator.details("99", "ebay").await;

    match result {
        Err(EcoScanError::Adapter {
            source_name,
            error: AdapterError::Status { url, status },
        }) => {
            assert_eq!(source_name, SourceName::Ebay);
            assert_eq!(url, "https://shop.example/99");
            assert_eq!(status, 500);
        }
        other => panic!("expected the adapter error, got {:?}", other),
    }
    // no fallback to another source
    assert_eq!(amazon.detail_calls(), 0);
}

#[tokio::test]
async fn test_real_adapter_detail_failure_propagates() {
    let fetcher = Arc::new(StaticFetcher::failing());
    let ebay: Arc<dyn Source> =
        Arc::new(SiteSource::new(ebay::PROFILE, fetcher.clone(), DEFAULT_USER_AGENT).unwrap());
    let aggregator = Aggregator::new(vec![ebay]);

    let result = aggregator.details("1234567890", "ebay").await;

    assert!(matches!(
        result,
        Err(EcoScanError::Adapter {
            source_name: SourceName::Ebay,
            error: AdapterError::Status { status: 503, .. },
        })
    ));
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_source_names_in_order() {
    let aggregator = aggregator_of(&[
        Arc::new(MockSource::new(SourceName::Flipkart, vec![])),
        Arc::new(MockSource::new(SourceName::Amazon, vec![])),
    ]);
    assert_eq!(
        aggregator.source_names(),
        vec![SourceName::Flipkart, SourceName::Amazon]
    );
}
