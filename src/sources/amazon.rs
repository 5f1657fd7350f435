use super::profile::{
    DetailLayout, IdRule, ImageRewrite, SearchLayout, SiteProfile, SpecsRule, Text, TitleRule,
    UrlRule,
};
use crate::data_models::SourceName;

pub const PROFILE: SiteProfile = SiteProfile {
    name: SourceName::Amazon,
    origin: "https://www.amazon.com",
    search_url: "https://www.amazon.com/s?k={query}",
    detail_url: "https://www.amazon.com/dp/{id}",
    extra_headers: &[],
    search: SearchLayout {
        item: ".s-result-item[data-asin]",
        link: None,
        id: IdRule::Attribute("data-asin"),
        title: TitleRule::Text(Text::all("h2 span")),
        price: Text::first(".a-price .a-offscreen"),
        image: "img.s-image",
        url: UrlRule::Template("https://www.amazon.com/dp/{id}"),
    },
    detail: DetailLayout {
        title: Text::all("#productTitle"),
        price: Text::first(".a-price .a-offscreen"),
        gallery: "#altImages img",
        main_image: "#landingImage",
        skip_images_containing: Some("sprite"),
        image_rewrite: ImageRewrite::StripThumbnailSuffix,
        description: &["#productDescription p"],
        specs: SpecsRule::Rows {
            row: "#productDetails_techSpec_section_1 tr",
            label: "th",
            value: "td",
        },
    },
};
