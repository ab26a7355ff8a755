use crate::app::settings;
use leptos::*;
use leptos_router::use_location;
use repair_core::dto;

#[component]
pub fn Header() -> impl IntoView {
    let settings = settings();
    let location = use_location();
    let shell = create_memo(move |_| dto::shell(&location.pathname.get(), &settings));

    view! {
      <header class="bg-white shadow-sm">
        <div class="flex items-center justify-between px-6 py-4">
          <h1 class="text-2xl font-semibold text-gray-800">{move || shell.with(|s| s.title.clone())}</h1>
          <div class="flex items-center space-x-4">
            <button class="relative p-2 text-gray-600 hover:text-gray-900">
              <span class="icon w-6 h-6" data-icon="bell"></span>
              <span class="absolute top-0 right-0 w-2 h-2 bg-red-500 rounded-full"></span>
            </button>
            <div class="flex items-center space-x-2">
              <span class="icon w-8 h-8 text-gray-600" data-icon="user"></span>
              <span class="text-sm font-medium text-gray-700">
                {move || shell.with(|s| s.operator.clone())}
              </span>
            </div>
          </div>
        </div>
      </header>
    }
}
