use super::profile::{
    DetailLayout, IdRule, ImageRewrite, SearchLayout, SiteProfile, SpecsRule, Text, TitleRule,
    UrlRule,
};
use crate::data_models::SourceName;

pub const PROFILE: SiteProfile = SiteProfile {
    name: SourceName::Snapdeal,
    origin: "https://www.snapdeal.com",
    search_url: "https://www.snapdeal.com/search?keyword={query}",
    detail_url: "https://www.snapdeal.com/product/{id}",
    extra_headers: &[],
    search: SearchLayout {
        item: ".product-tuple-listing",
        link: Some("a.dp-widget-link"),
        id: IdRule::LastLinkSegment,
        title: TitleRule::Text(Text::all(".product-title")),
        price: Text::all(".product-price"),
        image: ".product-image img",
        url: UrlRule::Link,
    },
    detail: DetailLayout {
        title: Text::all("h1.pdp-e-i-head"),
        price: Text::all("span.payBlkBig"),
        gallery: "#bx-pager a img",
        main_image: ".cloudzoom",
        skip_images_containing: None,
        // thumbnails are served at 55x55, ask for the 512 rendition
        image_rewrite: ImageRewrite::Replace {
            from: "-55-55",
            to: "-512-512",
        },
        description: &[".detailssubbox"],
        specs: SpecsRule::Rows {
            row: ".spec-body tr",
            label: "td.spec-title",
            value: "td.spec-value",
        },
    },
};
