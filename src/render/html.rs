use crate::schedule::{DAY_NAMES, Schedule};
use crate::status::PickupStatus;

const STYLE: &str = "<style>
    body { font-family: Arial, sans-serif; }
    table { border-collapse: collapse; width: 100%; text-align: center; border: 1px solid #ccc; margin-bottom: 20px; }
    th { background-color: #d9ead3; padding: 10px; border: 1px solid #ccc; }
    td { padding: 8px; border: 1px solid #ccc; }
    tr.date-row { background-color: #cfe2f3; font-weight: bold; }
    tr.pickup-row { background-color: #f7f7f7; }
    td.label-cell { font-weight: bold; text-align: left; padding-left: 15px; }
    p.error { color: #b00020; font-weight: bold; }
    .status-available { color: green; font-weight: bold; }
    .status-unavailable { color: red; font-weight: bold; }
    .status-complicated { color: orange; font-weight: bold; }
    .status-travel { color: blue; font-style: italic; }
    .status-office { color: gray; }
    .status-holiday { color: #DAA520; }
    .status-unknown { color: purple; font-weight: bold; }
    ul.legend { list-style: none; padding: 0; }
    ul.legend li { margin-bottom: 5px; }
    ul.legend span { display: inline-block; min-width: 20px; text-align: center; margin-right: 10px; }
</style>";

/// Self-contained HTML document written by the CLI.
pub fn render_html_document(schedule: &Schedule) -> String {
    let mut body = String::new();
    push_table(&mut body, schedule, false);
    push_legend(&mut body);
    page("Pickup Schedule", &body)
}

/// Editable page served by the web handlers.
///
/// `error` carries the message for a rejected edit; the table below it
/// always shows the current, unmodified grid.
pub fn render_edit_page(schedule: &Schedule, error: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(message) = error {
        body.push_str(&format!("<p class='error'>{message}</p>"));
    }
    push_table(&mut body, schedule, true);
    body.push_str(
        "<form method='post' action='/add_week'><button type='submit'>Add week</button></form>",
    );
    push_legend(&mut body);
    page("Pickup Schedule", &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{title}</title>
    {STYLE}
</head>
<body>
    <h1>{title}</h1>
    {body}
</body>
</html>"
    )
}

fn push_table(out: &mut String, schedule: &Schedule, editable: bool) {
    out.push_str("<table>");
    out.push_str("<thead><tr><th>Week / Pickup</th>");
    for name in DAY_NAMES {
        out.push_str(&format!("<th>{name}</th>"));
    }
    out.push_str("</tr></thead><tbody>");

    for (w, week) in schedule.weeks().iter().enumerate() {
        out.push_str(&format!(
            "<tr class='date-row'><td class='label-cell'>{}</td>",
            week.label()
        ));
        for date in week.dates() {
            out.push_str(&format!("<td>{}</td>", date.format("%d %b")));
        }
        out.push_str("</tr>");

        out.push_str("<tr class='pickup-row'><td class='label-cell'>Pickup");
        if editable {
            out.push_str(&format!(
                " <form method='post' action='/remove_week/{w}'>\
                 <button type='submit'>Remove week</button></form>"
            ));
        }
        out.push_str("</td>");
        for (d, day) in week.days.iter().enumerate() {
            if editable {
                push_status_select(out, w, d, day.status);
            } else {
                out.push_str(&format!("<td>{}</td>", day.status.html_span()));
            }
        }
        out.push_str("</tr>");
    }

    out.push_str("</tbody></table>");
}

fn push_status_select(out: &mut String, week: usize, day: usize, current: PickupStatus) {
    out.push_str("<td><form method='post' action='/set_status'>");
    out.push_str(&format!(
        "<input type='hidden' name='week' value='{week}'/>\
         <input type='hidden' name='day' value='{day}'/>"
    ));
    out.push_str("<select name='status' onchange='this.form.submit()'>");
    for status in PickupStatus::ALL {
        let selected = if status == current { " selected" } else { "" };
        out.push_str(&format!(
            "<option value='{}'{selected}>{}</option>",
            status.key(),
            status.description()
        ));
    }
    out.push_str("</select></form></td>");
}

fn push_legend(out: &mut String) {
    out.push_str("<h2>Legend</h2><ul class='legend'>");
    for status in PickupStatus::ALL {
        out.push_str(&format!(
            "<li>{} : {}</li>",
            status.html_span(),
            status.description()
        ));
    }
    out.push_str("</ul>");
}
