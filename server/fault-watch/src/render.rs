//! Report projection: one static HTML page per location.
//!
//! Operators keep this page open on the floor; it refreshes itself and links
//! across locations, so the watcher regenerates it wholesale on every run.

use fault_engine::OccurrenceCluster;

/// Client-side refresh interval, seconds.
const PAGE_REFRESH_SECS: u32 = 300;

const PAGE_STYLE: &str = "\
body { font-family: Arial, sans-serif; font-size: 18px; background-color: #f4f4f9; color: #333; margin: 0; padding: 0; }
.header { background-color: #4CAF50; color: white; padding: 20px; font-size: 24px; display: flex; justify-content: space-between; align-items: center; }
.cpf { font-size: 30px; background-color: #ffffff; padding: 10px; border-radius: 5px; color: #000; }
.location-select { font-size: 22px; background-color: #ffffff; padding: 10px; border-radius: 5px; color: #000; }
.container { padding: 20px; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #4CAF50; color: white; }
tr:nth-child(even) { background-color: #f2f2f2; }
.highlight { color: red; }
.no-data { text-align: center; color: red; font-size: 20px; font-weight: bold; margin-top: 20px; }
";

/// File name (and selector stem) of a location's page.
pub fn page_file_name(location: &str) -> String {
  format!("{}.html", page_stem(location))
}

fn page_stem(location: &str) -> String {
  format!("real_time_fault_alerts_{}", location)
}

/// Shuttle-comms loss and controller warnings get the red row treatment.
fn is_highlighted(description: &str) -> bool {
  description == "No Communications with Shuttle" || description.starts_with("W:")
}

/// Minimal escaping for text interpolated into the page.
fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Render the alerts page for one location: header bar with the location
/// selector and CPF badge, then the cluster table (newest first) or the
/// no-data banner.
pub fn render_page(
  location: &str,
  all_locations: &[String],
  clusters: &[OccurrenceCluster],
  cpf: &str,
) -> String {
  let mut html = String::with_capacity(8 * 1024);

  html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
  html.push_str(&format!(
    "<title>Real-Time Fault Alerts - {}</title>\n",
    escape_html(location)
  ));
  html.push_str(&format!(
    "<meta http-equiv=\"refresh\" content=\"{}\">\n",
    PAGE_REFRESH_SECS
  ));
  html.push_str("<style>\n");
  html.push_str(PAGE_STYLE);
  html.push_str("</style>\n<script>\n");
  html.push_str(
    "function changeLocation() {\n  var location = document.getElementById('locationSelect').value;\n  window.location.href = location + '.html';\n}\n",
  );
  html.push_str("</script>\n</head>\n<body>\n");

  html.push_str("<div class=\"header\">\n<div class=\"location-select\">\n");
  html.push_str("<label for=\"locationSelect\">Select Location:</label>\n");
  html.push_str("<select id=\"locationSelect\" onchange=\"changeLocation()\">\n");
  for loc in all_locations {
    let selected = if loc == location { " selected" } else { "" };
    html.push_str(&format!(
      "<option value=\"{}\"{}>{}</option>\n",
      escape_html(&page_stem(loc)),
      selected,
      escape_html(loc)
    ));
  }
  html.push_str("</select>\n</div>\n<div><h1>Real-Time Fault Alerts</h1></div>\n");
  html.push_str(&format!(
    "<div class=\"cpf\">Cases per Fault: {}</div>\n</div>\n",
    escape_html(cpf)
  ));

  html.push_str("<div class=\"container\">\n");
  if clusters.is_empty() {
    html.push_str("<div class=\"no-data\">No data available yet.</div>\n");
  } else {
    html.push_str("<table id=\"alertsTable\">\n<thead>\n<tr>");
    html.push_str("<th>Aisle</th><th>Level</th><th>Fault Description</th>");
    html.push_str("<th>Timestamp of most recent fault</th><th>Occurrences Within 90 Minutes</th>");
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for cluster in clusters {
      let class = if is_highlighted(&cluster.error_description) {
        " class=\"highlight\""
      } else {
        ""
      };
      html.push_str(&format!(
        "<tr{}><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        class,
        cluster.aisle,
        escape_html(&cluster.level.to_string()),
        escape_html(&cluster.error_description),
        cluster.timestamp.format("%Y-%m-%d %H:%M"),
        cluster.occurrences_within_90_minutes,
      ));
    }
    html.push_str("</tbody>\n</table>\n");
  }
  html.push_str("</div>\n</body>\n</html>\n");

  html
}
