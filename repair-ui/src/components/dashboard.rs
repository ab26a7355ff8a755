use super::list::{TD, TH};
use super::repair_modal::RepairModal;
use crate::app::settings;
use leptos::*;
use repair_core::dto;
use repair_core::{Dashboard, DashboardAction};

const BADGE: &str = "px-2 py-1 inline-flex text-xs leading-5 font-semibold rounded-full";

fn stat_icon(name: &str) -> &'static str {
    match name {
        "Active Repairs" => "clipboard-list",
        "Pending Pickup" => "clock",
        "Urgent" => "alert-triangle",
        _ => "check-circle",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let settings = settings();
    let state = create_rw_signal(Dashboard::seeded());
    let view_model = create_memo(move |_| state.with(|d| dto::dashboard(d, &settings)));
    let dispatch = Callback::new(move |action: DashboardAction| {
        state.update(|d| {
            d.apply(action);
        });
    });

    view! {
      <div class="space-y-6">
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
          <For
            each=move || view_model.with(|v| v.stats.clone())
            key=|card| card.clone()
            children=move |card| view! {
              <div class="bg-white rounded-lg shadow-sm p-6 flex items-center">
                <div class=format!("p-3 rounded-lg bg-{}-100 mr-4", card.tone)>
                  <span class=format!("icon w-6 h-6 text-{}-600", card.tone) data-icon=stat_icon(&card.name)></span>
                </div>
                <div>
                  <p class="text-sm font-medium text-gray-600">{card.name}</p>
                  <p class="text-2xl font-semibold text-gray-900">{card.value}</p>
                </div>
              </div>
            }
          />
        </div>

        <div class="bg-white rounded-lg shadow-sm">
          <div class="p-6">
            <div class="flex items-center mb-6">
              <span class="icon w-6 h-6 text-blue-600 mr-2" data-icon="timer"></span>
              <h2 class="text-lg font-semibold text-gray-900">"Active Repairs"</h2>
            </div>
            <div class="overflow-x-auto">
              <table class="min-w-full divide-y divide-gray-200">
                <thead>
                  <tr>
                    <th class=TH>"Customer/Device"</th>
                    <th class=TH>"Issue"</th>
                    <th class=TH>"Technician"</th>
                    <th class=TH>"Status"</th>
                    <th class=TH>"Priority"</th>
                    <th class=TH>"Timeline"</th>
                    <th class=TH>"Actions"</th>
                  </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                  <For
                    each=move || view_model.with(|v| v.repairs.clone())
                    key=|row| row.clone()
                    children=move |row| {
                      let id = row.id.clone();
                      view! {
                        <tr class="hover:bg-gray-50">
                          <td class=TD>
                            <div class="text-sm font-medium text-gray-900">{row.customer}</div>
                            <div class="text-sm text-gray-500">{row.device}</div>
                          </td>
                          <td class=TD><div class="text-sm text-gray-900">{row.issue}</div></td>
                          <td class=TD><div class="text-sm text-gray-900">{row.technician}</div></td>
                          <td class=TD>
                            <span class=format!("{BADGE} {}", row.status_class)>{row.status_label}</span>
                          </td>
                          <td class=TD>
                            <span class=format!("{BADGE} {}", row.priority_class)>{row.priority_label}</span>
                          </td>
                          <td class=TD>
                            <div class="text-sm text-gray-500">
                              <div>{row.started}</div>
                              <div>{row.estimated}</div>
                            </div>
                          </td>
                          <td class="px-6 py-4 whitespace-nowrap text-sm">
                            <div class="flex space-x-3">
                              <button
                                class="text-blue-600 hover:text-blue-900 font-medium"
                                on:click=move |_| dispatch.call(DashboardAction::OpenUpdate { repair_id: id.clone() })
                              >
                                "Update"
                              </button>
                              // completion flow not built yet
                              <button class="text-green-600 hover:text-green-900 font-medium">"Complete"</button>
                            </div>
                          </td>
                        </tr>
                      }
                    }
                  />
                </tbody>
              </table>
            </div>
          </div>
        </div>

        <div class="bg-white rounded-lg shadow-sm">
          <div class="p-6">
            <div class="flex items-center mb-6">
              <span class="icon w-6 h-6 text-green-600 mr-2" data-icon="package"></span>
              <h2 class="text-lg font-semibold text-gray-900">"Pending Pickups"</h2>
            </div>
            <div class="overflow-x-auto">
              <table class="min-w-full divide-y divide-gray-200">
                <thead>
                  <tr>
                    <th class=TH>"Customer/Device"</th>
                    <th class=TH>"Ready Since"</th>
                    <th class=TH>"Contact Attempts"</th>
                    <th class=TH>"Phone"</th>
                    <th class=TH>"Actions"</th>
                  </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                  <For
                    each=move || view_model.with(|v| v.pickups.clone())
                    key=|row| row.clone()
                    children=move |row| {
                      let contact_id = row.id.clone();
                      let pickup_id = row.id.clone();
                      view! {
                        <tr class="hover:bg-gray-50">
                          <td class=TD>
                            <div class="text-sm font-medium text-gray-900">{row.customer}</div>
                            <div class="text-sm text-gray-500">{row.device}</div>
                          </td>
                          <td class=TD>
                            <div class="text-sm text-gray-900">{row.ready_date}</div>
                            <div class="text-xs text-gray-500">{row.ready_time}</div>
                          </td>
                          <td class=TD>
                            <span class=format!("{BADGE} {}", row.attempts_class)>{row.attempts_label}</span>
                          </td>
                          <td class=TD><div class="text-sm text-gray-900">{row.phone}</div></td>
                          <td class="px-6 py-4 whitespace-nowrap text-sm">
                            <div class="flex space-x-3">
                              <button
                                class="flex items-center text-blue-600 hover:text-blue-900 font-medium"
                                on:click=move |_| dispatch.call(DashboardAction::Contact { pickup_id: contact_id.clone() })
                              >
                                <span class="icon w-4 h-4 mr-1" data-icon="phone"></span>
                                "Contact"
                              </button>
                              <button
                                class="text-green-600 hover:text-green-900 font-medium"
                                on:click=move |_| dispatch.call(DashboardAction::MarkPickedUp { pickup_id: pickup_id.clone() })
                              >
                                "Picked Up"
                              </button>
                            </div>
                          </td>
                        </tr>
                      }
                    }
                  />
                </tbody>
              </table>
            </div>
          </div>
        </div>

        {move || view_model.with(|v| v.modal.clone()).map(|modal| view! { <RepairModal modal=modal dispatch=dispatch/> })}
      </div>
    }
}
