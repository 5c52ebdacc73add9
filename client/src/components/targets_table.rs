//! Scrape-target table.
//!
//! Pure projection of the rows it is given. The only interaction is the
//! "Is Scraped" checkbox, reported upward by target id.

#[cfg(test)]
#[path = "targets_table_test.rs"]
mod targets_table_test;

use leptos::prelude::*;

use crate::state::targets::Target;
use crate::util::format;

/// Column headers in display order.
pub const COLUMNS: [&str; 9] = [
    "Username",
    "Profile Pic",
    "Is Private",
    "Last Scraped",
    "Is Scraped",
    "Added Date",
    "Total Stories",
    "Stories Last 24h",
    "Comments",
];

#[component]
pub fn TargetsTable(rows: Signal<Vec<Target>>, on_toggle: Callback<u64>) -> impl IntoView {
    view! {
        <div class="targets-table__wrap">
            <table class="targets-table">
                <thead>
                    <tr>{COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td class="targets-table__empty" colspan=COLUMNS.len().to_string()>
                                        "No results"
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            rows.into_iter().map(|t| target_row(t, on_toggle)).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn target_row(target: Target, on_toggle: Callback<u64>) -> impl IntoView {
    let id = target.id;
    let private_class = if target.is_private { "targets-table__private" } else { "targets-table__muted" };

    view! {
        <tr class="targets-table__row">
            <td class="targets-table__username">{format::handle(&target.username)}</td>
            <td>
                <img class="targets-table__avatar" src=target.profile_pic_url alt=""/>
            </td>
            <td>
                <span class=private_class>{format::yes_no(target.is_private)}</span>
            </td>
            <td>{format::last_scraped(target.last_scraped)}</td>
            <td>
                <input
                    type="checkbox"
                    class="targets-table__checkbox"
                    prop:checked=target.is_scraped
                    on:change=move |_| on_toggle.run(id)
                />
            </td>
            <td>{format::date(target.added_date)}</td>
            <td>{target.total_stories}</td>
            <td>{target.stories_24h}</td>
            <td>{format::text_or_placeholder(&target.comments)}</td>
        </tr>
    }
}
