use super::profile::{
    DetailLayout, IdRule, ImageRewrite, SearchLayout, SiteProfile, SpecsRule, Text, TitleRule,
    UrlRule,
};
use crate::data_models::SourceName;

pub const PROFILE: SiteProfile = SiteProfile {
    name: SourceName::Flipkart,
    origin: "https://www.flipkart.com",
    search_url: "https://www.flipkart.com/search?q={query}",
    detail_url: "https://www.flipkart.com/product/{id}",
    extra_headers: &[],
    search: SearchLayout {
        item: "div._1AtVbE",
        link: Some("a._1fQZEK"),
        id: IdRule::LastLinkSegment,
        title: TitleRule::Text(Text::all("div._4rR01T")),
        price: Text::all("div._30jeq3"),
        image: "img._396cs4",
        url: UrlRule::OriginPlusLink,
    },
    detail: DetailLayout {
        title: Text::all("span.B_NuCI"),
        price: Text::all("div._30jeq3._16Jk6d"),
        gallery: "img.q6DClP",
        main_image: "div._3kidJX img",
        skip_images_containing: None,
        image_rewrite: ImageRewrite::Keep,
        description: &["div._1mXcCf p"],
        specs: SpecsRule::Rows {
            row: "div._14cfVK",
            label: "td:nth-child(1)",
            value: "td:nth-child(2)",
        },
    },
};
