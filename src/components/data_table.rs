//! Generic data table driven by a column specification.
//!
//! DESIGN
//! ======
//! Columns either derive plain display text from a row (`CellValue`, with
//! boolean and missing values localized centrally) or supply a custom view
//! callback for action cells. Pages keep their column lists declarative and
//! leave row/empty-state rendering here.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;

/// Display value derived from a row field.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Bool(bool),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// `None` renders as the placeholder dash.
    pub fn opt(value: Option<impl Into<String>>) -> Self {
        value.map_or(Self::Missing, |v| Self::Text(v.into()))
    }
}

/// Render a cell value as display text.
pub fn cell_text(value: &CellValue) -> String {
    match value {
        CellValue::Text(text) => text.clone(),
        CellValue::Bool(true) => "Ano".to_owned(),
        CellValue::Bool(false) => "Ne".to_owned(),
        CellValue::Missing => "-".to_owned(),
    }
}

/// The empty-state cell spans every column; a column-less table still
/// renders one cell.
fn empty_state_colspan(column_count: usize) -> usize {
    column_count.max(1)
}

#[derive(Clone)]
enum ColumnCell<R: Send + Sync + 'static> {
    Value(Callback<R, CellValue>),
    View(Callback<R, AnyView>),
}

/// One column of a [`DataTable`].
#[derive(Clone)]
pub struct Column<R: Send + Sync + 'static> {
    pub header: String,
    cell: ColumnCell<R>,
}

impl<R: Send + Sync + 'static> Column<R> {
    /// A column rendering derived display text.
    pub fn text(
        header: impl Into<String>,
        derive: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            cell: ColumnCell::Value(Callback::new(move |row: R| derive(&row))),
        }
    }

    /// A column rendering a custom view (buttons, links).
    pub fn view(
        header: impl Into<String>,
        render: impl Fn(&R) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            cell: ColumnCell::View(Callback::new(move |row: R| render(&row))),
        }
    }
}

/// Tabular rendering of `rows` against `columns`. Zero rows render a
/// single empty-state row spanning all columns.
#[component]
pub fn DataTable<R>(
    #[prop(into)] rows: Signal<Vec<R>>,
    columns: Vec<Column<R>>,
    #[prop(into, optional)] empty_message: Option<String>,
    #[prop(into, optional)] on_row_click: Option<Callback<R>>,
) -> impl IntoView
where
    R: Clone + Send + Sync + 'static,
{
    let empty_message = empty_message.unwrap_or_else(|| "Žádná data".to_owned());
    let colspan = empty_state_colspan(columns.len()).to_string();
    let headers: Vec<String> = columns.iter().map(|c| c.header.clone()).collect();
    let columns = StoredValue::new(columns);
    let row_class = if on_row_click.is_some() {
        "data-table__row data-table__row--clickable"
    } else {
        "data-table__row"
    };

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers
                        .into_iter()
                        .map(|header| view! { <th>{header}</th> })
                        .collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    let items = rows.get();
                    if items.is_empty() {
                        view! {
                            <tr class="data-table__empty">
                                <td colspan=colspan.clone()>{empty_message.clone()}</td>
                            </tr>
                        }
                            .into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|row| {
                                let cells = columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|column| match &column.cell {
                                            ColumnCell::Value(derive) => {
                                                view! { <td>{cell_text(&derive.run(row.clone()))}</td> }
                                                    .into_any()
                                            }
                                            ColumnCell::View(render) => {
                                                view! { <td>{render.run(row.clone())}</td> }.into_any()
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                });
                                let clicked_row = row.clone();
                                view! {
                                    <tr
                                        class=row_class
                                        on:click=move |_| {
                                            if let Some(callback) = on_row_click {
                                                callback.run(clicked_row.clone());
                                            }
                                        }
                                    >
                                        {cells}
                                    </tr>
                                }
                                    .into_any()
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}
