use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Search => {
            let mut groups = Vec::new();
            if !state.results.items.is_empty() {
                groups.push(FooterGroup {
                    name: "COPY",
                    items: vec![
                        FooterItem {
                            key: "Enter",
                            desc: "arg",
                        },
                        FooterItem {
                            key: "^t",
                            desc: "title",
                        },
                        FooterItem {
                            key: "^s",
                            desc: "subtitle",
                        },
                    ],
                });
                groups.push(FooterGroup {
                    name: "NAV",
                    items: vec![FooterItem {
                        key: "↑/↓",
                        desc: "move",
                    }],
                });
            }
            groups.push(FooterGroup {
                name: "APP",
                items: vec![
                    FooterItem {
                        key: "^o",
                        desc: "prefs",
                    },
                    FooterItem {
                        key: "F1",
                        desc: "help",
                    },
                    FooterItem {
                        key: "Esc",
                        desc: if state.search_text().is_empty() {
                            "quit"
                        } else {
                            "clear"
                        },
                    },
                ],
            });
            groups
        }
        AppMode::Preferences => vec![FooterGroup {
            name: "PREFS",
            items: vec![
                FooterItem {
                    key: "Enter",
                    desc: "save",
                },
                FooterItem {
                    key: "Esc",
                    desc: "cancel",
                },
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem {
                key: "Esc",
                desc: "close",
            }],
        }],
    }
}
