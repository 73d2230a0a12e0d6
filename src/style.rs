use std::collections::{BTreeMap, HashMap};

use lightningcss::printer::PrinterOptions;
use lightningcss::properties::svg::SVGPaint;
use lightningcss::properties::Property;
use lightningcss::rules::{CssRule, CssRuleList};
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use lightningcss::traits::ToCss;
use lightningcss::values::color::{CssColor, SRGB};

use crate::color::Rgb;

/// The declarations of one class rule.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyleRule {
    /// The resolved fill. `None` if the rule has no fill or `fill: none`.
    pub fill: Option<Rgb>,
    /// All other declarations as serialized CSS, keyed by property name.
    pub attributes: BTreeMap<String, String>,
}

/// Class name to style lookup, built once from the embedded style sheet.
#[derive(Debug, Default, Clone)]
pub struct StyleTable {
    rules: HashMap<String, StyleRule>,
}

impl StyleTable {
    /// Build the table from the `<defs><style>` block of a document.
    pub fn from_document(document: &roxmltree::Document) -> StyleTable {
        let style = document
            .root_element()
            .children()
            .find(|n| n.has_tag_name("defs"))
            .and_then(|defs| defs.children().find(|n| n.has_tag_name("style")));

        match style {
            Some(style) => StyleTable::parse(style.text().unwrap_or_default()),
            None => {
                log::debug!("no style sheet found");
                StyleTable::default()
            }
        }
    }

    /// Build the table from CSS source.
    pub fn parse(css: &str) -> StyleTable {
        let mut table = StyleTable::default();
        if css.trim().is_empty() {
            return table;
        }

        match StyleSheet::parse(css, ParserOptions::default()) {
            Ok(sheet) => table.collect(sheet.rules),
            Err(err) => log::warn!("ignoring style sheet that failed to parse: {err}"),
        }

        table
    }

    fn collect(&mut self, rules: CssRuleList) {
        for rule in rules.0 {
            let CssRule::Style(style_rule) = rule else {
                continue;
            };

            let selectors = style_rule
                .selectors
                .to_css_string(PrinterOptions::default())
                .unwrap_or_default();

            let mut parsed = StyleRule::default();
            let declarations = style_rule.declarations;
            for property in declarations
                .declarations
                .iter()
                .chain(declarations.important_declarations.iter())
            {
                apply_property(property, &mut parsed);
            }

            for selector in selectors.split(',') {
                let selector = selector.trim();
                let name = selector.strip_prefix('.').unwrap_or(selector);
                if !name.is_empty() {
                    self.rules.insert(name.to_string(), parsed.clone());
                }
            }
        }
    }

    /// The fill of a class. Unknown classes and rules without a fill resolve to `None`.
    pub fn resolve(&self, class: &str) -> Option<Rgb> {
        self.rules.get(class).and_then(|rule| rule.fill)
    }

    pub fn rule(&self, class: &str) -> Option<&StyleRule> {
        self.rules.get(class)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn apply_property(property: &Property, rule: &mut StyleRule) {
    if let Property::Fill(paint) = property {
        match paint {
            SVGPaint::None => {
                rule.fill = None;
                rule.attributes.remove("fill");
                return;
            }
            SVGPaint::Color(color) => {
                if let Some(rgb) = css_color_to_rgb(color) {
                    rule.fill = Some(rgb);
                    rule.attributes.remove("fill");
                    return;
                }
            }
            _ => {}
        }
        // Paint servers and the like are kept as text but never filled with.
        rule.fill = None;
    }

    let name = property.property_id().name().to_string();
    match property.value_to_css_string(PrinterOptions::default()) {
        Ok(value) => {
            rule.attributes.insert(name, value);
        }
        Err(err) => log::debug!("failed to serialize `{name}`: {err}"),
    }
}

fn css_color_to_rgb(color: &CssColor) -> Option<Rgb> {
    if let CssColor::RGBA(rgba) = color {
        return Some(Rgb::new(rgba.red, rgba.green, rgba.blue));
    }
    SRGB::try_from(color).ok().map(|srgb| Rgb::from_f32(srgb.r, srgb.g, srgb.b))
}
