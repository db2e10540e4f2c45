use reassist_core::{CtaButton, Msg, NavTab, ProfileTab, SortKey, YearFilter};

pub const HELP: &[&str] = &[
    "Commands:",
    "  sort <citations|year|title>            order the articles list",
    "  filter <all|since2020|since2018|custom> limit articles by year",
    "  tab <articles|coauthors>               switch profile tab",
    "  star <n>                               toggle the star on the n-th declared publication",
    "  back                                   leave the profile page",
    "  nav <chats|documents|grants|conferences|help>",
    "  go <path>                              open a location directly",
    "  trial | demo                           call-to-action buttons (landing page)",
    "  help | quit",
];

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let msg = match (verb.to_ascii_lowercase().as_str(), arg) {
        ("", _) => Some(Msg::NoOp),
        ("help" | "?", _) => return Command::Help,
        ("quit" | "exit" | "q", _) => return Command::Quit,
        ("sort", value) if !value.is_empty() => {
            Some(Msg::SortKeySelected(SortKey::from_option_value(value)))
        }
        ("filter", value) if !value.is_empty() => {
            Some(Msg::YearFilterSelected(YearFilter::from_option_value(value)))
        }
        ("tab", name) => ProfileTab::from_name(name).map(Msg::TabSelected),
        // Publications are numbered from 1, in declared order.
        ("star", n) => n
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(|index| Msg::StarToggled { index }),
        ("back", "") => Some(Msg::BackClicked),
        ("nav", name) => NavTab::from_name(name).map(Msg::NavTabClicked),
        ("go", path) if path.starts_with('/') => Some(Msg::LocationChanged(path.to_string())),
        ("trial", "") => Some(Msg::CtaClicked(CtaButton::StartFreeTrial)),
        ("demo", "") => Some(Msg::CtaClicked(CtaButton::ScheduleDemo)),
        _ => None,
    };

    match msg {
        Some(msg) => Command::Dispatch(msg),
        None => Command::Unknown(line.to_string()),
    }
}
