//! Display preferences page.
//!
//! Layout preference picker plus what the store resolved it to.

use dioxus::prelude::*;

use crate::app::layout_mode::use_layout_mode;
use crate::app::ui_context::use_ui;
use crate::layout::LayoutMode;

#[component]
pub fn DisplayPreferences() -> Element {
    let ui = use_ui();
    let resolution = use_layout_mode();
    let state = ui.state();
    let device = ui.device();

    let device_label = if device.is_tv {
        "TV"
    } else if device.is_mobile {
        "Mobile"
    } else {
        "Desktop"
    };
    let shell_label = if resolution.is_experimental_layout {
        "Experimental"
    } else {
        "Legacy"
    };
    let effective = state.effective_layout.as_str();
    let orientation = format!("{:?}", state.orientation);

    rsx! {
        section { class: "displayPreferences",
            h1 { "Display" }

            article {
                label { r#for: "layout-select", "Layout" }
                select {
                    id: "layout-select",
                    disabled: device.is_tv,
                    onchange: move |e: FormEvent| {
                        match LayoutMode::parse(&e.value()) {
                            Some(mode) => ui.set_layout(mode),
                            None => tracing::warn!("Unknown layout option: {}", e.value()),
                        }
                    },
                    for mode in LayoutMode::ALL {
                        option {
                            value: mode.as_str(),
                            selected: mode == state.layout,
                            {mode.label()}
                        }
                    }
                }
                if device.is_tv {
                    small { "TV devices always use the TV layout." }
                } else {
                    small { "Auto picks a layout from the device. Changes apply immediately." }
                }
            }

            article {
                h2 { "Current layout" }
                table {
                    tbody {
                        tr { th { "Effective layout" } td { "{effective}" } }
                        tr { th { "Shell" } td { "{shell_label}" } }
                        tr { th { "Device" } td { "{device_label}" } }
                        tr { th { "Touch" } td { if device.supports_touch { "Yes" } else { "No" } } }
                        tr {
                            th { "Viewport" }
                            td { "{state.viewport.width} × {state.viewport.height} ({orientation})" }
                        }
                    }
                }
            }
        }
    }
}
