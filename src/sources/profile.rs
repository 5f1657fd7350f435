use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use scraper::{ElementRef, Html, Selector};

use crate::data_models::{Listing, ProductPage, SourceName};
use crate::error::AdapterError;
use crate::scoring::sustainability_score;

// numeric item id sitting right before the query string, e.g. `/itm/1234567?hash=...`
static ITEM_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"/(\d+)\?").unwrap());
static THUMBNAIL_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"_[S]C_\.\w+$").unwrap());

/// A text selector. `first_only` reads only the first match, otherwise the
/// text of every match is concatenated before trimming.
#[derive(Debug, Clone, Copy)]
pub struct Text {
    pub css: &'static str,
    pub first_only: bool,
}

impl Text {
    pub const fn all(css: &'static str) -> Text {
        Text {
            css,
            first_only: false,
        }
    }

    pub const fn first(css: &'static str) -> Text {
        Text {
            css,
            first_only: true,
        }
    }
}

/// Where a search result's identifier comes from.
#[derive(Debug, Clone, Copy)]
pub enum IdRule {
    /// An attribute on the result element itself.
    Attribute(&'static str),
    /// The digits right before `?` in the result link.
    ItemNumberInLink,
    /// The link's last path segment, query string removed.
    LastLinkSegment,
}

#[derive(Debug, Clone, Copy)]
pub enum TitleRule {
    Text(Text),
    LinkText,
}

/// How a search result's absolute detail URL is built.
#[derive(Debug, Clone, Copy)]
pub enum UrlRule {
    /// `{id}` is substituted into the template.
    Template(&'static str),
    /// The link's href is already absolute.
    Link,
    /// The link's href is relative to the site origin.
    OriginPlusLink,
}

#[derive(Debug, Clone, Copy)]
pub enum ImageRewrite {
    Keep,
    /// Drops a `_SC_.<ext>` thumbnail suffix.
    StripThumbnailSuffix,
    /// Replaces the first occurrence of `from`.
    Replace {
        from: &'static str,
        to: &'static str,
    },
}

impl ImageRewrite {
    pub fn apply(&self, src: &str) -> String {
        match self {
            ImageRewrite::Keep => src.to_string(),
            ImageRewrite::StripThumbnailSuffix => THUMBNAIL_SUFFIX.replace(src, "").into_owned(),
            ImageRewrite::Replace { from, to } => src.replacen(*from, to, 1),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SpecsRule {
    /// Each row holds a label cell and a value cell.
    Rows {
        row: &'static str,
        label: &'static str,
        value: &'static str,
    },
    /// Flat cells; every even-indexed cell is a label and its next sibling the value.
    AlternatingCells { cell: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct SearchLayout {
    pub item: &'static str,
    /// When set, results without this link element are skipped.
    pub link: Option<&'static str>,
    pub id: IdRule,
    pub title: TitleRule,
    pub price: Text,
    pub image: &'static str,
    pub url: UrlRule,
}

#[derive(Debug, Clone, Copy)]
pub struct DetailLayout {
    pub title: Text,
    pub price: Text,
    pub gallery: &'static str,
    /// Used only when the gallery yields nothing.
    pub main_image: &'static str,
    pub skip_images_containing: Option<&'static str>,
    pub image_rewrite: ImageRewrite,
    /// Tried in order, first non-empty wins.
    pub description: &'static [&'static str],
    pub specs: SpecsRule,
}

/// Everything one marketplace adapter knows about its site.
#[derive(Debug, Clone, Copy)]
pub struct SiteProfile {
    pub name: SourceName,
    pub origin: &'static str,
    /// Contains a `{query}` placeholder.
    pub search_url: &'static str,
    /// Contains an `{id}` placeholder.
    pub detail_url: &'static str,
    /// Sent on top of the user agent. Names must be lowercase.
    pub extra_headers: &'static [(&'static str, &'static str)],
    pub search: SearchLayout,
    pub detail: DetailLayout,
}

struct CompiledText {
    selector: Selector,
    first_only: bool,
}

impl CompiledText {
    fn new(text: Text) -> Result<CompiledText, AdapterError> {
        Ok(CompiledText {
            selector: compile(text.css)?,
            first_only: text.first_only,
        })
    }

    fn read(&self, scope: ElementRef) -> String {
        let mut out = String::new();
        for el in scope.select(&self.selector) {
            out.extend(el.text());
            if self.first_only {
                break;
            }
        }
        out.trim().to_string()
    }
}

struct CompiledSearch {
    item: Selector,
    link: Option<Selector>,
    title: Option<CompiledText>,
    price: CompiledText,
    image: Selector,
}

enum CompiledSpecs {
    Rows {
        row: Selector,
        label: Selector,
        value: Selector,
    },
    AlternatingCells {
        cell: Selector,
    },
}

struct CompiledDetail {
    title: CompiledText,
    price: CompiledText,
    gallery: Selector,
    main_image: Selector,
    description: Vec<Selector>,
    specs: CompiledSpecs,
}

fn compile(css: &str) -> Result<Selector, AdapterError> {
    Selector::parse(css).map_err(|e| AdapterError::Selector {
        css: css.to_string(),
        reason: format!("{:?}", e),
    })
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn all_text(scope: ElementRef, selector: &Selector) -> String {
    scope
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

fn first_src(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("src"))
        .map(str::to_string)
}

fn last_path_segment(href: &str) -> &str {
    let segment = href.rsplit('/').next().unwrap_or(href);
    segment.split('?').next().unwrap_or(segment)
}

/// Keeps digits and dots, then reads the longest leading decimal number.
/// `"$1,299.99"` gives `1299.99`, `"$10.00 to $20.00"` gives `10.002`, `"N/A"` gives `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in cleaned.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + 1;
    }

    cleaned[..end].parse::<f64>().ok()
}

impl SiteProfile {
    pub fn search_url(&self, query: &str) -> String {
        self.search_url
            .replace("{query}", &urlencoding::encode(query))
    }

    pub fn detail_url(&self, product_id: &str) -> String {
        self.detail_url.replace("{id}", product_id)
    }

    pub fn headers(&self, user_agent: &str) -> Result<HeaderMap, AdapterError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
        for (name, value) in self.extra_headers {
            headers.insert(
                HeaderName::from_static(*name),
                HeaderValue::from_static(*value),
            );
        }
        Ok(headers)
    }

    /// Compiles every selector and discards the result, so a broken profile is
    /// reported when the adapter is built. Parsing compiles again on each call.
    pub fn validate(&self) -> Result<(), AdapterError> {
        self.compile_search()?;
        self.compile_detail()?;
        Ok(())
    }

    fn compile_search(&self) -> Result<CompiledSearch, AdapterError> {
        let layout = &self.search;
        Ok(CompiledSearch {
            item: compile(layout.item)?,
            link: layout.link.map(compile).transpose()?,
            title: match layout.title {
                TitleRule::Text(text) => Some(CompiledText::new(text)?),
                TitleRule::LinkText => None,
            },
            price: CompiledText::new(layout.price)?,
            image: compile(layout.image)?,
        })
    }

    fn compile_detail(&self) -> Result<CompiledDetail, AdapterError> {
        let layout = &self.detail;
        let specs = match layout.specs {
            SpecsRule::Rows { row, label, value } => CompiledSpecs::Rows {
                row: compile(row)?,
                label: compile(label)?,
                value: compile(value)?,
            },
            SpecsRule::AlternatingCells { cell } => CompiledSpecs::AlternatingCells {
                cell: compile(cell)?,
            },
        };
        Ok(CompiledDetail {
            title: CompiledText::new(layout.title)?,
            price: CompiledText::new(layout.price)?,
            gallery: compile(layout.gallery)?,
            main_image: compile(layout.main_image)?,
            description: layout
                .description
                .iter()
                .map(|css| compile(css))
                .collect::<Result<Vec<_>, _>>()?,
            specs,
        })
    }

    /// Parses a search results page. Results missing a title or a price are dropped,
    /// as are those missing the link or id attribute their layout reads.
    pub fn parse_search(&self, html: &str) -> Result<Vec<Listing>, AdapterError> {
        let compiled = self.compile_search()?;
        let document = Html::parse_document(html);

        let listings = document
            .select(&compiled.item)
            .filter_map(|item| self.extract_listing(item, &compiled))
            .collect();
        Ok(listings)
    }

    fn extract_listing(&self, item: ElementRef, compiled: &CompiledSearch) -> Option<Listing> {
        let layout = &self.search;

        let link = match &compiled.link {
            Some(selector) => Some(item.select(selector).next()?),
            None => None,
        };
        let href = link.and_then(|l| l.value().attr("href"));

        // only a missing or blank id attribute drops the result; a link ending in `/`
        // still yields an (empty) id
        let id = match layout.id {
            IdRule::Attribute(attr) => match item.value().attr(attr)? {
                "" => return None,
                id => id.to_string(),
            },
            IdRule::ItemNumberInLink => ITEM_NUMBER.captures(href?)?.get(1)?.as_str().to_string(),
            IdRule::LastLinkSegment => last_path_segment(href?).to_string(),
        };

        let url = match layout.url {
            UrlRule::Template(template) => template.replace("{id}", &id),
            UrlRule::Link => href?.to_string(),
            UrlRule::OriginPlusLink => format!("{}{}", self.origin, href?),
        };

        let title = match (&compiled.title, &compiled.link) {
            (Some(text), _) => text.read(item),
            (None, Some(link_selector)) => all_text(item, link_selector),
            (None, None) => String::new(),
        };
        let price = parse_price(&compiled.price.read(item));

        // a zero price counts as missing
        if title.is_empty() || !price.is_some_and(|p| p > 0.0) {
            return None;
        }

        let sustainability_level = sustainability_score(&title, None);
        Some(Listing {
            id,
            title,
            price,
            image_url: first_src(item, &compiled.image),
            url,
            sustainability_level,
        })
    }

    /// Parses a product detail page for `product_id`.
    pub fn parse_details(&self, product_id: &str, html: &str) -> Result<ProductPage, AdapterError> {
        let layout = &self.detail;
        let compiled = self.compile_detail()?;
        let document = Html::parse_document(html);
        let root = document.root_element();

        let title = compiled.title.read(root);
        let price = parse_price(&compiled.price.read(root));

        let mut images: Vec<String> = root
            .select(&compiled.gallery)
            .filter_map(|img| img.value().attr("src"))
            .filter(|src| {
                layout
                    .skip_images_containing
                    .is_none_or(|needle| !src.contains(needle))
            })
            .map(|src| layout.image_rewrite.apply(src))
            .collect();
        if images.is_empty() {
            images.extend(first_src(root, &compiled.main_image));
        }

        let description = compiled
            .description
            .iter()
            .map(|selector| all_text(root, selector))
            .find(|text| !text.is_empty())
            .unwrap_or_default();

        let specs = read_specs(root, &compiled.specs);
        let sustainability_level = sustainability_score(&title, Some(description.as_str()));

        Ok(ProductPage {
            id: product_id.to_string(),
            title,
            price,
            images,
            description,
            specs,
            url: self.detail_url(product_id),
            sustainability_level,
        })
    }
}

fn read_specs(root: ElementRef, specs: &CompiledSpecs) -> HashMap<String, String> {
    let mut out = HashMap::new();
    match specs {
        CompiledSpecs::Rows { row, label, value } => {
            for row in root.select(row) {
                let key = all_text(row, label);
                let value = all_text(row, value);
                if !key.is_empty() && !value.is_empty() {
                    out.insert(key, value);
                }
            }
        }
        CompiledSpecs::AlternatingCells { cell } => {
            for (i, cell) in root.select(cell).enumerate() {
                if i % 2 != 0 {
                    continue;
                }
                let key = element_text(cell);
                let value = cell
                    .next_siblings()
                    .find_map(ElementRef::wrap)
                    .map(element_text)
                    .unwrap_or_default();
                if !key.is_empty() && !value.is_empty() {
                    out.insert(key, value);
                }
            }
        }
    }
    out
}
