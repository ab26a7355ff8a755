use super::list::{ListHeading, RowActions, SearchBox, TableHead, TD};
use leptos::*;
use repair_core::dto;
use repair_core::search::ListPage;
use repair_core::seed;

const COLUMNS: &[&str] = &["Name", "Email", "Phone", "Joined", "Actions"];

#[component]
pub fn CustomersPage() -> impl IntoView {
    let page = create_rw_signal(ListPage::new(seed::customers()));
    let list = create_memo(move |_| page.with(dto::customer_list));
    let query = Signal::derive(move || page.with(|p| p.query().to_string()));
    let on_query = Callback::new(move |q: String| page.update(|p| p.set_query(q)));

    view! {
      <div class="space-y-6">
        <ListHeading title="Customers" add_label="Add Customer"/>
        <div class="bg-white rounded-lg shadow">
          <SearchBox placeholder="Search customers..." query=query on_query=on_query/>
          <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
              <TableHead columns=COLUMNS/>
              <tbody class="bg-white divide-y divide-gray-200">
                <For
                  each=move || list.with(|l| l.rows.clone())
                  key=|row| row.id.clone()
                  children=move |row| view! {
                    <tr class="hover:bg-gray-50">
                      <td class=TD><div class="text-sm font-medium text-gray-900">{row.name}</div></td>
                      <td class=TD><div class="text-sm text-gray-500">{row.email}</div></td>
                      <td class=TD><div class="text-sm text-gray-500">{row.phone}</div></td>
                      <td class=TD><div class="text-sm text-gray-500">{row.joined}</div></td>
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
