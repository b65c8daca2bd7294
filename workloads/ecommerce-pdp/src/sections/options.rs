//! Size and color picker renderers.

use super::{escape_html, hidden_inputs};
use crate::page::ProductPage;

/// Render the size and color pickers. Only multi-variant products get them.
pub fn render_options(page: &ProductPage) -> String {
    if !page.product().is_multi_variant() {
        return String::new();
    }
    let options = page.resolution().options;
    let selection = page.selection();

    let sizes = picker(
        "Select Size",
        "size",
        &options.sizes,
        selection.size.as_deref(),
        |size| page.size_enabled(size),
        &hidden_inputs(selection, &["size", "qty"]),
    );
    let colors = picker(
        "Select Color",
        "color",
        &options.colors,
        selection.color.as_deref(),
        |color| page.color_enabled(color),
        &hidden_inputs(selection, &["color", "qty"]),
    );

    format!("{sizes}{colors}")
}

fn picker(
    heading: &str,
    name: &str,
    values: &[String],
    selected: Option<&str>,
    enabled: impl Fn(&str) -> bool,
    hidden: &str,
) -> String {
    if values.is_empty() {
        return String::new();
    }

    let buttons: String = values
        .iter()
        .map(|value| {
            let is_selected = selected == Some(value.as_str());
            let is_enabled = enabled(value);
            let class = match (is_selected, is_enabled) {
                (true, _) => "option option--selected",
                (false, true) => "option",
                (false, false) => "option option--disabled",
            };
            format!(
                r#"<button type="submit" name="{name}" value="{value}" class="{class}"{disabled}>{value}</button>"#,
                name = name,
                value = escape_html(value),
                class = class,
                disabled = if is_enabled { "" } else { " disabled" },
            )
        })
        .collect();

    format!(
        r#"<div class="pdp-option" data-option="{name}">
    <h3>{heading} <span class="required">*</span></h3>
    <form method="get" class="option-list">{hidden}{buttons}</form>
</div>"#
    )
}
