use crate::app::settings;
use leptos::*;
use leptos_router::use_location;
use repair_core::dto;

const ACTIVE: &str = "flex items-center px-6 py-3 text-sm bg-gray-800 text-white";
const IDLE: &str =
    "flex items-center px-6 py-3 text-sm text-gray-400 hover:bg-gray-800 hover:text-white";

#[component]
pub fn Sidebar() -> impl IntoView {
    let settings = settings();
    let location = use_location();
    let shell = create_memo(move |_| dto::shell(&location.pathname.get(), &settings));

    view! {
      <div class="flex flex-col w-64 bg-gray-900 text-white">
        <div class="flex items-center justify-center h-16 border-b border-gray-800">
          <span class="icon w-8 h-8 mr-2" data-icon="laptop"></span>
          <span class="text-xl font-bold">{move || shell.with(|s| s.shop_name.clone())}</span>
        </div>
        <nav class="flex-1 overflow-y-auto">
          <ul class="py-4">
            <For
              each=move || shell.with(|s| s.nav.clone())
              key=|item| (item.href, item.active)
              children=move |item| {
                let class = if item.active { ACTIVE } else { IDLE };
                view! {
                  <li>
                    <a href=item.href class=class>
                      <span class="icon w-5 h-5 mr-3" data-icon=item.icon></span>
                      {item.label}
                    </a>
                  </li>
                }
              }
            />
          </ul>
        </nav>
      </div>
    }
}
