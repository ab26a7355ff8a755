//! Pieces shared by the customer and device tables.

use leptos::*;

pub const TH: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
pub const TD: &str = "px-6 py-4 whitespace-nowrap";

#[component]
pub fn ListHeading(title: &'static str, add_label: &'static str) -> impl IntoView {
    view! {
      <div class="flex justify-between items-center">
        <h1 class="text-2xl font-semibold text-gray-900">{title}</h1>
        // no handler until records can be created
        <button class="bg-blue-600 text-white px-4 py-2 rounded-lg flex items-center gap-2 hover:bg-blue-700">
          <span class="icon w-4 h-4" data-icon="plus"></span>
          {add_label}
        </button>
      </div>
    }
}

#[component]
pub fn SearchBox(
    placeholder: &'static str,
    #[prop(into)] query: Signal<String>,
    on_query: Callback<String>,
) -> impl IntoView {
    view! {
      <div class="p-4 border-b border-gray-200">
        <div class="relative">
          <span class="icon absolute left-3 top-1/2 transform -translate-y-1/2 text-gray-400 w-5 h-5" data-icon="search"></span>
          <input
            type="text"
            placeholder=placeholder
            class="pl-10 pr-4 py-2 w-full border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
            prop:value=move || query.get()
            on:input=move |ev| on_query.call(event_target_value(&ev))
          />
        </div>
      </div>
    }
}

#[component]
pub fn TableHead(columns: &'static [&'static str]) -> impl IntoView {
    view! {
      <thead class="bg-gray-50">
        <tr>
          {columns.iter().map(|c| view! { <th class=TH>{*c}</th> }).collect_view()}
        </tr>
      </thead>
    }
}

/// Edit/delete icons; inert until records can be changed.
#[component]
pub fn RowActions() -> impl IntoView {
    view! {
      <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
        <div class="flex space-x-3">
          <button class="text-blue-600 hover:text-blue-900">
            <span class="icon w-5 h-5" data-icon="edit"></span>
          </button>
          <button class="text-red-600 hover:text-red-900">
            <span class="icon w-5 h-5" data-icon="trash"></span>
          </button>
        </div>
      </td>
    }
}
