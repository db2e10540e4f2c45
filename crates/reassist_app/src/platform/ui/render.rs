use reassist_core::{
    AppViewModel, ChartBarView, CtaView, NavItemView, Page, ProfileTab, ProfileView,
    PublicationRecord, SortKey, YearFilter,
};

/// Width of a full chart bar, in characters.
const CHART_WIDTH: usize = 40;
const RULE_WIDTH: usize = 72;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![render_sidebar(&view.nav), "─".repeat(RULE_WIDTH)];

    match (&view.page, &view.profile, &view.cta) {
        (Page::Profile, Some(profile), _) => render_profile(profile, &mut lines),
        (Page::Landing, _, Some(cta)) => render_cta(cta, &mut lines),
        _ => lines.push(format!("No page at {}", view.current_path)),
    }

    lines.push(String::new());
    lines
}

fn render_sidebar(nav: &[NavItemView]) -> String {
    let tabs: Vec<String> = nav
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                format!(" {} ", item.label)
            }
        })
        .collect();
    format!("Re-Assist   {}", tabs.join(" "))
}

fn render_profile(profile: &ProfileView, lines: &mut Vec<String>) {
    lines.push("< Back".to_string());
    lines.push(format!("({}) {}", profile.initials, profile.name));
    lines.push(format!("    {}", profile.affiliation));
    if !profile.interests.is_empty() {
        lines.push(format!("    Interests: {}", profile.interests.join(" · ")));
    }
    lines.push(format!(
        "    Citations {} | h-index {} | i10-index {}",
        format_with_commas(profile.stats.citations),
        profile.stats.h_index,
        profile.stats.i10_index
    ));

    if !profile.chart.is_empty() {
        lines.push(String::new());
        lines.push("Citations per Year".to_string());
        lines.extend(profile.chart.iter().map(chart_bar));
    }

    lines.push(String::new());
    lines.push(render_tabs(profile.active_tab));

    match profile.active_tab {
        ProfileTab::Articles => render_articles(profile, lines),
        ProfileTab::Coauthors => {
            lines.extend(
                profile
                    .coauthors
                    .iter()
                    .map(|author| format!("  {} ({})", author.name, author.affiliation)),
            );
        }
    }
}

fn render_tabs(active: ProfileTab) -> String {
    [ProfileTab::Articles, ProfileTab::Coauthors]
        .into_iter()
        .map(|tab| {
            if tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_articles(profile: &ProfileView, lines: &mut Vec<String>) {
    lines.push(format!(
        "Sort by: {}   Year range: {}",
        select_line(
            profile.sort_key.label(),
            SortKey::known().iter().map(SortKey::option_value)
        ),
        select_line(
            profile.year_filter.label(),
            YearFilter::known().iter().map(YearFilter::option_value)
        ),
    ));

    if profile.display_list.is_empty() {
        lines.push("  No articles in this range.".to_string());
    }
    for (row, record) in profile.display_list.iter().enumerate() {
        lines.extend(publication_rows(row + 1, record));
    }
}

fn select_line<'a>(current: &str, options: impl Iterator<Item = &'a str>) -> String {
    format!("{current} ({})", options.collect::<Vec<_>>().join("/"))
}

fn publication_rows(row: usize, record: &PublicationRecord) -> [String; 4] {
    let star = if record.is_starred { "★" } else { "☆" };
    [
        format!("{row:>3}. {star} {}", record.title),
        format!("       {}", record.authors),
        format!("       {}, {}", record.venue, record.year),
        format!(
            "       {} citations",
            format_with_commas(record.citation_count)
        ),
    ]
}

fn chart_bar(bar: &ChartBarView) -> String {
    let filled = (bar.height_percent / 100.0 * CHART_WIDTH as f64).round() as usize;
    // Small but non-zero years still get a visible stub.
    let filled = if bar.citations > 0 { filled.max(1) } else { 0 };
    format!(
        "  {} {:<width$} {}",
        bar.year,
        "█".repeat(filled),
        format_with_commas(bar.citations),
        width = CHART_WIDTH
    )
}

fn render_cta(cta: &CtaView, lines: &mut Vec<String>) {
    lines.push(cta.heading.to_string());
    lines.push(cta.blurb.to_string());
    let buttons: Vec<String> = cta
        .buttons
        .iter()
        .map(|button| format!("[ {} ]", button.label()))
        .collect();
    lines.push(buttons.join("  "));
}

fn format_with_commas(value: u32) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
