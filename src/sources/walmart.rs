use super::profile::{
    DetailLayout, IdRule, ImageRewrite, SearchLayout, SiteProfile, SpecsRule, Text, TitleRule,
    UrlRule,
};
use crate::data_models::SourceName;

pub const PROFILE: SiteProfile = SiteProfile {
    name: SourceName::Walmart,
    origin: "https://www.walmart.com",
    search_url: "https://www.walmart.com/search?q={query}",
    detail_url: "https://www.walmart.com/ip/{id}",
    extra_headers: &[
        ("accept", "text/html,application/xhtml+xml,application/xml"),
        ("accept-language", "en-US,en;q=0.9"),
    ],
    search: SearchLayout {
        item: "div[data-item-id]",
        link: Some(r#"a[link-identifier="linkProductTitle"]"#),
        id: IdRule::Attribute("data-item-id"),
        title: TitleRule::LinkText,
        price: Text::all(r#"span[data-automation-id="product-price"]"#),
        image: r#"img[data-testid="product-image"]"#,
        url: UrlRule::OriginPlusLink,
    },
    detail: DetailLayout {
        title: Text::all(r#"h1[itemprop="name"]"#),
        price: Text::all(r#"span[itemprop="price"]"#),
        gallery: "img.hover-zoom-hero-image",
        main_image: r#"img[data-testid="main-image"]"#,
        skip_images_containing: None,
        image_rewrite: ImageRewrite::Keep,
        description: &[r#"div[itemprop="description"]"#],
        // the table is walked as flat label/value cells
        specs: SpecsRule::AlternatingCells {
            cell: ".specification-table td",
        },
    },
};
