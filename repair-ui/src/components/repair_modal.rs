use leptos::*;
use repair_core::dto::{OptionDto, RepairModalDto};
use repair_core::error::parse_variant;
use repair_core::repairs::{Priority, RepairStatus};
use repair_core::DashboardAction;

const SELECT: &str = "w-full rounded-md border border-gray-300 shadow-sm px-4 py-2 bg-white text-sm focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

fn options(options: Vec<OptionDto>, current: String) -> impl IntoView {
    options
        .into_iter()
        .map(|o| {
            let selected = o.value == current;
            view! { <option value=o.value selected=selected>{o.label}</option> }
        })
        .collect_view()
}

/// Edits a detached copy of one repair; nothing is stored until Save.
#[component]
pub fn RepairModal(modal: RepairModalDto, dispatch: Callback<DashboardAction>) -> impl IntoView {
    let close = move |_: ev::MouseEvent| dispatch.call(DashboardAction::CloseModal);

    let on_status = move |event: ev::Event| {
        match parse_variant::<RepairStatus>("repair status", &event_target_value(&event)) {
            Ok(status) => dispatch.call(DashboardAction::EditStatus(status)),
            Err(err) => tracing::warn!(%err, "ignoring status selection"),
        }
    };
    let on_priority = move |event: ev::Event| {
        match parse_variant::<Priority>("priority", &event_target_value(&event)) {
            Ok(priority) => dispatch.call(DashboardAction::EditPriority(priority)),
            Err(err) => tracing::warn!(%err, "ignoring priority selection"),
        }
    };

    view! {
      <div class="fixed inset-0 bg-gray-600 bg-opacity-50 overflow-y-auto h-full w-full flex items-center justify-center">
        <div class="relative bg-white rounded-lg shadow-xl max-w-md w-full mx-4">
          <div class="flex items-center justify-between p-4 border-b">
            <h3 class="text-lg font-semibold text-gray-900">"Update Repair Status"</h3>
            <button class="text-gray-400 hover:text-gray-500" on:click=close>
              <span class="icon w-5 h-5" data-icon="x"></span>
            </button>
          </div>
          <div class="p-6 space-y-4">
            <div>
              <label class="block text-sm font-medium text-gray-700 mb-2">"Customer/Device"</label>
              <p class="text-sm text-gray-900">{modal.heading}</p>
            </div>
            <div>
              <label class="block text-sm font-medium text-gray-700 mb-2">"Status"</label>
              <select class=SELECT on:change=on_status>
                {options(modal.status_options, modal.status)}
              </select>
            </div>
            <div>
              <label class="block text-sm font-medium text-gray-700 mb-2">"Priority"</label>
              <select class=SELECT on:change=on_priority>
                {options(modal.priority_options, modal.priority)}
              </select>
            </div>
          </div>
          <div class="flex items-center justify-end p-4 border-t gap-4">
            <button class="px-4 py-2 text-sm font-medium text-gray-700 hover:text-gray-500" on:click=close>
              "Cancel"
            </button>
            <button
              class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700"
              on:click=move |_| dispatch.call(DashboardAction::SaveChanges)
            >
              "Save Changes"
            </button>
          </div>
        </div>
      </div>
    }
}
