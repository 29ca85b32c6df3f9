//! Category card widget.
//!
//! Shows one product category as a card: title, product count, a link to the
//! category page, and either the category's own thumbnail or a custom image.

use log::warn;

use shelfcard_core::{Catalog, Host, Widget, WidgetDescriptor};
use shelfcard_render::{Element, InlineStyle};
use shelfcard_types::{
    BoxDimensions, CategoryCardSettings, Control, ControlSchema, Fragment, ImageRef, Section,
    SelectOption, Settings, SliderValue, Unit, UnitRange, SWITCH_ON,
};

/// Background used when the instance has no usable background color
const FALLBACK_BACKGROUND_COLOR: &str = "#000000";
/// Text color used when the instance has no usable text color
const FALLBACK_TEXT_COLOR: &str = "#ffffff";

/// Wrapper-scoped selector the style controls bind to
const CARD_SELECTOR: &str = "{{WRAPPER}} .category-card";

/// The category card widget
pub struct CategoryCardWidget {
    descriptor: WidgetDescriptor,
}

impl CategoryCardWidget {
    pub fn new() -> Self {
        Self {
            descriptor: WidgetDescriptor::new(
                "category_card",
                "Category Card",
                "posts-grid",
                "general",
            ),
        }
    }
}

impl Default for CategoryCardWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Display values derived from one settings record, built and dropped per
/// render call
struct ResolvedCard {
    title: String,
    image_url: String,
    product_count: u64,
    link: String,
    background_color: String,
    text_color: String,
}

/// A color setting counts only when present and non-empty
fn color_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(color) if !color.is_empty() => color,
        _ => fallback,
    }
}

/// Resolve display values, or `None` when the selected category does not
/// exist. This is the renderer's only error branch.
fn resolve(settings: &CategoryCardSettings, catalog: &dyn Catalog) -> Option<ResolvedCard> {
    let category = catalog.category_by_slug(&settings.category)?;

    // Category thumbnail (or the catalog placeholder) when the switch is on;
    // the custom image URL exactly as stored, valid or not, when it is off.
    let image_url = if settings.use_category_image == SWITCH_ON {
        catalog
            .category_thumbnail(category.id)
            .and_then(|attachment| catalog.attachment_url(attachment))
            .unwrap_or_else(|| catalog.placeholder_image_url())
    } else {
        settings.custom_image.url.clone()
    };

    let title = if settings.custom_title.is_empty() {
        category.name
    } else {
        settings.custom_title.clone()
    };

    Some(ResolvedCard {
        title,
        image_url,
        product_count: category.count,
        link: category.link,
        background_color: color_or(settings.background_color.as_deref(), FALLBACK_BACKGROUND_COLOR)
            .to_string(),
        text_color: color_or(settings.text_color.as_deref(), FALLBACK_TEXT_COLOR).to_string(),
    })
}

fn build_card(card: &ResolvedCard) -> Fragment {
    let container_style = InlineStyle::new()
        .decl("display", "flex")
        .decl("align-items", "center")
        .decl("justify-content", "space-between")
        .decl("background-color", card.background_color.as_str())
        .decl("color", card.text_color.as_str())
        .decl("border-radius", "10px")
        .decl("transition", "transform 0.3s ease");

    let link_style = InlineStyle::new()
        .decl("color", card.text_color.as_str())
        .decl("font-size", "1.5rem")
        .decl("text-decoration", "none");

    let image_style = InlineStyle::new()
        .decl("max-width", "130px")
        .decl("border-radius", "10px");

    Element::new("div")
        .class("category-card")
        .style(container_style)
        .child(
            Element::new("div")
                .class("category-info")
                .child(Element::new("h2").text(card.title.as_str()))
                .child(Element::new("p").text(format!("{} products", card.product_count)))
                .child(
                    Element::new("a")
                        .attr("href", card.link.as_str())
                        .class("view-link")
                        .style(link_style)
                        .child(Element::new("span").class("arrow-icon").text("→")),
                ),
        )
        .child(
            Element::new("div").class("category-image").child(
                Element::new("img")
                    .attr("src", card.image_url.as_str())
                    .attr("alt", card.title.as_str())
                    .style(image_style),
            ),
        )
        .into_fragment()
}

/// Fixed notice emitted when the selected category does not exist; identical
/// bytes no matter what the rest of the record holds
fn invalid_category_notice() -> Fragment {
    Element::new("p").text("Invalid category selected.").into_fragment()
}

impl Widget for CategoryCardWidget {
    fn descriptor(&self) -> &WidgetDescriptor {
        &self.descriptor
    }

    fn controls(&self, catalog: &dyn Catalog, host: &dyn Host) -> ControlSchema {
        let options: Vec<SelectOption> = catalog
            .categories()
            .into_iter()
            .map(|category| SelectOption::new(category.slug, category.name))
            .collect();
        // First category in catalog order; an empty catalog leaves the
        // selector without a default.
        let default_category = options.first().map(|option| option.value.clone());

        ControlSchema::new(vec![
            Section::content(
                "content_section",
                "Content",
                vec![
                    Control::select("category", "Category", options, default_category),
                    Control::switch("use_category_image", "Use Category Image", "Yes", "No", true),
                    Control::media(
                        "custom_image",
                        "Custom Image",
                        ImageRef::new(host.placeholder_image_url()),
                    )
                    .visible_unless("use_category_image", SWITCH_ON),
                    Control::text("custom_title", "Custom Title", ""),
                ],
            ),
            Section::style(
                "style_section",
                "Style",
                vec![
                    Control::color("background_color", "Background Color", None)
                        .selector(CARD_SELECTOR, "background-color: {{VALUE}};"),
                    Control::color("text_color", "Text Color", Some(FALLBACK_TEXT_COLOR))
                        .selector(CARD_SELECTOR, "color: {{VALUE}};"),
                    Control::slider(
                        "border_radius",
                        "Border Radius",
                        &[Unit::Px, Unit::Percent],
                        vec![
                            UnitRange::new(Unit::Px, 0.0, 100.0),
                            UnitRange::new(Unit::Percent, 0.0, 50.0),
                        ],
                        SliderValue::px(10.0),
                    )
                    .selector(CARD_SELECTOR, "border-radius: {{SIZE}}{{UNIT}};"),
                    Control::dimensions(
                        "padding",
                        "Padding",
                        &[Unit::Px, Unit::Em, Unit::Percent],
                        BoxDimensions::zero(Unit::Px),
                    )
                    .selector(
                        CARD_SELECTOR,
                        "padding: {{TOP}}{{UNIT}} {{RIGHT}}{{UNIT}} {{BOTTOM}}{{UNIT}} {{LEFT}}{{UNIT}};",
                    ),
                ],
            ),
        ])
    }

    fn render(&self, settings: &Settings, catalog: &dyn Catalog, _host: &dyn Host) -> Fragment {
        let settings = CategoryCardSettings::from_settings(settings);
        match resolve(&settings, catalog) {
            Some(card) => build_card(&card),
            None => {
                warn!("Category card: no category with slug {:?}", settings.category);
                invalid_category_notice()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use shelfcard_catalog::MemoryCatalog;
    use shelfcard_core::StaticHost;
    use shelfcard_types::{Category, ControlKind, Tab, TermId};

    const PLACEHOLDER: &str = "https://site/img/woocommerce-placeholder.png";

    fn sample_catalog() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new(PLACEHOLDER);
        catalog.add_category(Category::new(
            TermId(7),
            "shoes",
            "Shoes",
            42,
            "https://site/cat/shoes",
        ));
        catalog.add_category(Category::new(
            TermId(8),
            "hats",
            "Hats",
            0,
            "https://site/cat/hats",
        ));
        catalog
    }

    fn host() -> StaticHost {
        StaticHost::new("https://site/img/editor-placeholder.png")
    }

    fn settings(pairs: &[(&str, Value)]) -> Settings {
        let mut settings = Settings::new();
        for (key, value) in pairs {
            settings.insert(*key, value.clone());
        }
        settings
    }

    fn render(settings: &Settings, catalog: &MemoryCatalog) -> String {
        CategoryCardWidget::new()
            .render(settings, catalog, &host())
            .into_string()
    }

    #[test]
    fn test_unknown_category_renders_only_the_notice() {
        let catalog = sample_catalog();
        let html = render(&settings(&[("category", json!("ghost"))]), &catalog);
        assert_eq!(html, "<p>Invalid category selected.</p>");
    }

    #[test]
    fn test_notice_is_byte_identical_regardless_of_other_settings() {
        let catalog = sample_catalog();
        let plain = render(&settings(&[("category", json!("ghost"))]), &catalog);
        let loaded = render(
            &settings(&[
                ("category", json!("ghost")),
                ("use_category_image", json!("yes")),
                ("custom_title", json!("<b>Title</b>")),
                ("background_color", json!("#123456")),
                ("text_color", json!("#654321")),
            ]),
            &catalog,
        );
        assert_eq!(plain, loaded);
    }

    #[test]
    fn test_category_image_uses_thumbnail_when_present() {
        let mut catalog = sample_catalog();
        catalog.set_thumbnail(TermId(7), "https://site/img/shoes-thumb.jpg");
        let html = render(
            &settings(&[("category", json!("shoes")), ("use_category_image", json!("yes"))]),
            &catalog,
        );
        assert!(html.contains("src=\"https://site/img/shoes-thumb.jpg\""));
    }

    #[test]
    fn test_category_image_falls_back_to_catalog_placeholder() {
        let catalog = sample_catalog();
        let html = render(
            &settings(&[("category", json!("shoes")), ("use_category_image", json!("yes"))]),
            &catalog,
        );
        assert!(html.contains(&format!("src=\"{}\"", PLACEHOLDER)));
    }

    #[test]
    fn test_custom_image_url_is_used_verbatim() {
        let catalog = sample_catalog();
        let html = render(
            &settings(&[
                ("category", json!("shoes")),
                ("use_category_image", json!("")),
                ("custom_image", json!({"url": "not a real url"})),
            ]),
            &catalog,
        );
        assert!(html.contains("src=\"not a real url\""));

        // Even an empty URL passes through; the broken reference is the
        // user's to notice in the editor.
        let html = render(
            &settings(&[("category", json!("shoes")), ("use_category_image", json!(""))]),
            &catalog,
        );
        assert!(html.contains("src=\"\""));
    }

    #[test]
    fn test_switch_value_other_than_yes_means_off() {
        let catalog = sample_catalog();
        let html = render(
            &settings(&[
                ("category", json!("shoes")),
                ("use_category_image", json!("true")),
                ("custom_image", json!({"url": "https://site/img/custom.png"})),
            ]),
            &catalog,
        );
        assert!(html.contains("src=\"https://site/img/custom.png\""));
    }

    #[test]
    fn test_custom_title_overrides_category_name() {
        let catalog = sample_catalog();
        let html = render(
            &settings(&[("category", json!("shoes")), ("custom_title", json!("Best Sellers"))]),
            &catalog,
        );
        assert!(html.contains("<h2>Best Sellers</h2>"));
        assert!(html.contains("alt=\"Best Sellers\""));

        let html = render(
            &settings(&[("category", json!("shoes")), ("custom_title", json!(""))]),
            &catalog,
        );
        assert!(html.contains("<h2>Shoes</h2>"));
    }

    #[test]
    fn test_color_fallbacks() {
        let catalog = sample_catalog();
        let html = render(&settings(&[("category", json!("shoes"))]), &catalog);
        assert!(html.contains("background-color:#000000"));
        assert!(html.contains("color:#ffffff"));

        let html = render(
            &settings(&[
                ("category", json!("shoes")),
                ("background_color", json!("#112233")),
                ("text_color", json!("#aabbcc")),
            ]),
            &catalog,
        );
        assert!(html.contains("background-color:#112233"));
        assert!(html.contains("color:#aabbcc"));
    }

    #[test]
    fn test_empty_color_strings_fall_back() {
        let catalog = sample_catalog();
        let html = render(
            &settings(&[
                ("category", json!("shoes")),
                ("background_color", json!("")),
                ("text_color", json!("")),
            ]),
            &catalog,
        );
        assert!(html.contains("background-color:#000000"));
        assert!(html.contains("color:#ffffff"));
    }

    #[test]
    fn test_zero_products_still_counts() {
        let catalog = sample_catalog();
        let html = render(&settings(&[("category", json!("hats"))]), &catalog);
        assert!(html.contains("<p>0 products</p>"));
    }

    #[test]
    fn test_category_name_is_escaped_everywhere() {
        let mut catalog = MemoryCatalog::new(PLACEHOLDER);
        catalog.add_category(Category::new(
            TermId(9),
            "evil",
            "Shoes <script>alert(1)</script>",
            1,
            "https://site/cat/evil",
        ));
        let html = render(&settings(&[("category", json!("evil"))]), &catalog);
        assert!(!html.contains("<script>"));
        assert!(html.contains("<h2>Shoes &lt;script&gt;alert(1)&lt;/script&gt;</h2>"));
        assert!(html.contains("alt=\"Shoes &lt;script&gt;alert(1)&lt;/script&gt;\""));
    }

    #[test]
    fn test_attribute_values_cannot_break_out() {
        let mut catalog = MemoryCatalog::new(PLACEHOLDER);
        catalog.add_category(Category::new(
            TermId(10),
            "tricky",
            "Tricky",
            3,
            "https://site/cat/tricky?a=1&b=2",
        ));
        let html = render(
            &settings(&[
                ("category", json!("tricky")),
                ("text_color", json!("red\" onmouseover=\"steal()")),
            ]),
            &catalog,
        );
        assert!(html.contains("href=\"https://site/cat/tricky?a=1&amp;b=2\""));
        assert!(html.contains("color:red&quot; onmouseover=&quot;steal()"));
        assert!(!html.contains("onmouseover=\"steal()\""));
    }

    #[test]
    fn test_end_to_end_shoes_card() {
        let catalog = sample_catalog();
        let html = render(
            &settings(&[
                ("category", json!("shoes")),
                ("use_category_image", json!("yes")),
                ("custom_title", json!("")),
                ("background_color", json!("#112233")),
                ("text_color", json!("")),
            ]),
            &catalog,
        );
        assert_eq!(
            html,
            "<div class=\"category-card\" style=\"display:flex;align-items:center;\
             justify-content:space-between;background-color:#112233;color:#ffffff;\
             border-radius:10px;transition:transform 0.3s ease\">\
             <div class=\"category-info\">\
             <h2>Shoes</h2>\
             <p>42 products</p>\
             <a href=\"https://site/cat/shoes\" class=\"view-link\" \
             style=\"color:#ffffff;font-size:1.5rem;text-decoration:none\">\
             <span class=\"arrow-icon\">→</span></a></div>\
             <div class=\"category-image\">\
             <img src=\"https://site/img/woocommerce-placeholder.png\" alt=\"Shoes\" \
             style=\"max-width:130px;border-radius:10px\"></div></div>"
        );
    }

    #[test]
    fn test_controls_lists_catalog_categories_in_order() {
        let widget = CategoryCardWidget::new();
        let schema = widget.controls(&sample_catalog(), &host());

        let category = schema.find("category").unwrap();
        assert_eq!(category.kind, ControlKind::Select);
        assert_eq!(category.options.len(), 2);
        assert_eq!(category.options[0].value, "shoes");
        assert_eq!(category.options[1].value, "hats");
        assert_eq!(category.default, Some(json!("shoes")));
    }

    #[test]
    fn test_controls_with_empty_catalog() {
        let widget = CategoryCardWidget::new();
        let schema = widget.controls(&MemoryCatalog::new(PLACEHOLDER), &host());

        let category = schema.find("category").unwrap();
        assert!(category.options.is_empty());
        assert_eq!(category.default, None);
    }

    #[test]
    fn test_custom_image_control_declaration() {
        let widget = CategoryCardWidget::new();
        let schema = widget.controls(&sample_catalog(), &host());

        let custom_image = schema.find("custom_image").unwrap();
        assert_eq!(custom_image.kind, ControlKind::Media);
        assert_eq!(
            custom_image.default,
            Some(json!({"url": "https://site/img/editor-placeholder.png"}))
        );
        let condition = custom_image.condition.as_ref().unwrap();
        assert_eq!(condition.control, "use_category_image");
        assert_eq!(condition.equals, json!("yes"));
        assert!(condition.negate);
    }

    #[test]
    fn test_style_control_declarations() {
        let widget = CategoryCardWidget::new();
        let schema = widget.controls(&sample_catalog(), &host());

        let background = schema.find("background_color").unwrap();
        assert_eq!(background.default, None);
        assert_eq!(background.selectors[0].target, "{{WRAPPER}} .category-card");
        assert_eq!(background.selectors[0].declaration, "background-color: {{VALUE}};");

        let text = schema.find("text_color").unwrap();
        assert_eq!(text.default, Some(json!("#ffffff")));
        assert_eq!(text.selectors[0].declaration, "color: {{VALUE}};");

        let radius = schema.find("border_radius").unwrap();
        assert_eq!(radius.kind, ControlKind::Slider);
        assert_eq!(radius.default, Some(json!({"unit": "px", "size": 10.0})));
        assert_eq!(radius.units, vec![Unit::Px, Unit::Percent]);
        assert_eq!(radius.ranges.len(), 2);
        assert_eq!(radius.ranges[0].max, 100.0);
        assert_eq!(radius.ranges[1].max, 50.0);

        let padding = schema.find("padding").unwrap();
        assert_eq!(padding.kind, ControlKind::Dimensions);
        assert_eq!(padding.units, vec![Unit::Px, Unit::Em, Unit::Percent]);
        assert_eq!(
            padding.default,
            Some(json!({"top": 0.0, "right": 0.0, "bottom": 0.0, "left": 0.0, "unit": "px"}))
        );
    }

    #[test]
    fn test_sections_split_content_and_style() {
        let widget = CategoryCardWidget::new();
        let schema = widget.controls(&sample_catalog(), &host());
        assert_eq!(schema.sections.len(), 2);
        assert_eq!(schema.sections[0].tab, Tab::Content);
        assert_eq!(schema.sections[1].tab, Tab::Style);
    }

    #[test]
    fn test_default_settings_render_first_category() {
        let catalog = sample_catalog();
        let widget = CategoryCardWidget::new();
        let defaults = widget.controls(&catalog, &host()).default_settings();

        let html = widget.render(&defaults, &catalog, &host()).into_string();
        assert!(html.contains("<h2>Shoes</h2>"));
        assert!(html.contains(&format!("src=\"{}\"", PLACEHOLDER)));
        assert!(html.contains("color:#ffffff"));
        assert!(html.contains("background-color:#000000"));
    }

    #[test]
    fn test_descriptor() {
        let widget = CategoryCardWidget::new();
        assert_eq!(widget.descriptor().name, "category_card");
        assert_eq!(widget.descriptor().title, "Category Card");
    }
}
