use super::profile::{
    DetailLayout, IdRule, ImageRewrite, SearchLayout, SiteProfile, SpecsRule, Text, TitleRule,
    UrlRule,
};
use crate::data_models::SourceName;

pub const PROFILE: SiteProfile = SiteProfile {
    name: SourceName::Ebay,
    origin: "https://www.ebay.com",
    search_url: "https://www.ebay.com/sch/i.html?_nkw={query}",
    detail_url: "https://www.ebay.com/itm/{id}",
    extra_headers: &[
        ("accept", "text/html,application/xhtml+xml,application/xml"),
        ("accept-language", "en-US,en;q=0.9"),
    ],
    search: SearchLayout {
        item: ".s-item__wrapper",
        link: Some(".s-item__link"),
        id: IdRule::ItemNumberInLink,
        title: TitleRule::Text(Text::all(".s-item__title")),
        price: Text::all(".s-item__price"),
        image: ".s-item__image-img",
        url: UrlRule::Link,
    },
    detail: DetailLayout {
        title: Text::all(".x-item-title__mainTitle"),
        price: Text::all(".x-price-primary"),
        gallery: ".ux-image-carousel-item img",
        main_image: ".ux-image-carousel img",
        skip_images_containing: None,
        image_rewrite: ImageRewrite::Keep,
        description: &["#tab1 .product-description", ".d-item-description-wrapper"],
        specs: SpecsRule::Rows {
            row: ".x-product-details__table tr",
            label: "th",
            value: "td",
        },
    },
};
