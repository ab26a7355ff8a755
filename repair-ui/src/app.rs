use crate::components::customers::CustomersPage;
use crate::components::dashboard::DashboardPage;
use crate::components::devices::DevicesPage;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use leptos::*;
use leptos_router::*;
use repair_core::ShopSettings;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ShopSettings::default());

    view! {
      <Router>
        <div class="flex h-screen bg-gray-100">
          <Sidebar/>
          <div class="flex-1 flex flex-col overflow-hidden">
            <Header/>
            <main class="flex-1 overflow-y-auto p-6">
              <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/customers" view=CustomersPage/>
                <Route path="/devices" view=DevicesPage/>
                <Route path="/*any" view=Unrouted/>
              </Routes>
            </main>
          </div>
        </div>
      </Router>
    }
}

/// Sidebar targets without a page yet render nothing.
#[component]
fn Unrouted() -> impl IntoView {
    let location = use_location();
    create_effect(move |_| {
        tracing::debug!(path = %location.pathname.get(), "no page for path");
    });
    view! { <div class="unrouted"></div> }
}

pub fn settings() -> ShopSettings {
    use_context::<ShopSettings>().unwrap_or_default()
}
