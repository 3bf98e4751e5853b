//! Marker legend overlaid on the map.

use dioxus::prelude::*;
use fg_core::location::Category;
use fg_core::style::style_for;

/// One swatch per facility category, colored like its marker.
#[component]
pub fn MapLegend() -> Element {
    rsx! {
        div {
            style: "position: absolute; top: 16px; left: 16px; background: white; padding: 16px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.2); max-width: 320px; z-index: 1;",
            h3 { style: "margin: 0 0 8px 0; font-weight: 600;", "Map Legend" }
            for category in Category::ALL {
                LegendRow { key: "{category}", category }
            }
        }
    }
}

#[component]
fn LegendRow(category: Category) -> Element {
    let style = style_for(category);
    let swatch = format!(
        "display: inline-block; width: 14px; height: 14px; border-radius: 50%; background: {};",
        style.color
    );
    let label = category.legend_label();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; margin-top: 6px;",
            span { style: "{swatch}" }
            span { "{label}" }
        }
    }
}
