use super::list::{ListHeading, RowActions, SearchBox, TableHead, TD};
use leptos::*;
use repair_core::dto;
use repair_core::search::ListPage;
use repair_core::seed;

const COLUMNS: &[&str] = &[
    "Device",
    "Serial Number",
    "Issue",
    "Status",
    "Est. Completion",
    "Actions",
];

#[component]
pub fn DevicesPage() -> impl IntoView {
    let page = create_rw_signal(ListPage::new(seed::devices()));
    let list = create_memo(move |_| page.with(dto::device_list));
    let query = Signal::derive(move || page.with(|p| p.query().to_string()));
    let on_query = Callback::new(move |q: String| page.update(|p| p.set_query(q)));

    view! {
      <div class="space-y-6">
        <ListHeading title="Devices" add_label="Add Device"/>
        <div class="bg-white rounded-lg shadow">
          <SearchBox placeholder="Search devices..." query=query on_query=on_query/>
          <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
              <TableHead columns=COLUMNS/>
              <tbody class="bg-white divide-y divide-gray-200">
                <For
                  each=move || list.with(|l| l.rows.clone())
                  key=|row| row.id.clone()
                  children=move |row| view! {
                    <tr class="hover:bg-gray-50">
                      <td class=TD>
                        <div class="text-sm font-medium text-gray-900">{row.title}</div>
                        <div class="text-sm text-gray-500">{row.kind}</div>
                      </td>
                      <td class=TD><div class="text-sm text-gray-500">{row.serial_number}</div></td>
                      <td class=TD><div class="text-sm text-gray-900">{row.issue}</div></td>
                      <td class=TD>
                        <span class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}", row.status_class)>
                          {row.status_label}
                        </span>
                      </td>
                      <td class=TD><div class="text-sm text-gray-500">{row.estimated}</div></td>
                      <RowActions/>
                    </tr>
                  }
                />
              </tbody>
            </table>
          </div>
        </div>
      </div>
    }
}
