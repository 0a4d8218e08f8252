#![forbid(unsafe_code)]

//! End-to-end panel behavior against the in-memory board.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use scoreline_core::{
    LINE_COUNT, LineOrder, MemoryBoard, OBJECTIVE_NAME, Panel, PanelConfig, ProtocolLimits,
    ScoreboardTitle, line_entry,
};
use scoreline_style::{ends_with_dangling, strip_codes};

fn panel_with(config: PanelConfig) -> Panel<MemoryBoard> {
    let title = ScoreboardTitle::new(["§6§lArena", "§e§lArena"], 20, config.limits).unwrap();
    Panel::new(Arc::new(MemoryBoard::new()), title, config).unwrap()
}

#[test]
fn full_panel_renders_in_score_order() {
    let panel = panel_with(PanelConfig::new().with_order(LineOrder::TopDown));
    for line in 1..=LINE_COUNT {
        panel.set_text(line, &format!("Line {line}")).unwrap();
    }

    let rendered = panel.board().render(OBJECTIVE_NAME).unwrap();
    let visible: Vec<String> = rendered.iter().map(|l| strip_codes(l)).collect();
    let expected: Vec<String> = (1..=LINE_COUNT).map(|l| format!("Line {l}")).collect();
    assert_eq!(visible, expected);
}

#[test]
fn default_order_puts_highest_line_on_top() {
    let panel = panel_with(PanelConfig::default());
    panel.set_text(1, "bottom").unwrap();
    panel.set_text(2, "top").unwrap();

    let rendered = panel.board().render(OBJECTIVE_NAME).unwrap();
    let visible: Vec<String> = rendered.iter().map(|l| strip_codes(l)).collect();
    assert_eq!(visible, ["top", "bottom"]);
}

#[test]
fn split_text_reads_continuously_around_marker() {
    let panel = panel_with(PanelConfig::default());
    panel.set_text(5, "§bDiamonds mined: 1,024").unwrap();

    let rendered = panel.board().render(OBJECTIVE_NAME).unwrap();
    assert_eq!(strip_codes(&rendered[0]), "Diamonds mined: 1,024");
    assert!(rendered[0].contains(&line_entry(5).unwrap()));
}

#[test]
fn modern_limits_keep_long_text_in_prefix() {
    let panel = panel_with(PanelConfig::new().with_limits(ProtocolLimits::MODERN));
    let text = "§aThis line is longer than thirty-two characters";
    panel.set_text(1, text).unwrap();

    let team = panel.board().team("Line 1").unwrap();
    assert_eq!(team.prefix, text);
    assert!(team.suffix.is_empty());
}

#[test]
fn concurrent_writers_on_distinct_lines() {
    let panel = Arc::new(panel_with(PanelConfig::default()));
    let handles: Vec<_> = (1..=LINE_COUNT)
        .map(|line| {
            let panel = Arc::clone(&panel);
            thread::spawn(move || {
                for round in 0..20 {
                    panel.set_text(line, &format!("§{round:x}{line}:{round}")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(panel.board().team_count(), LINE_COUNT);
    for line in 1..=LINE_COUNT {
        assert_eq!(
            panel.text(line),
            Some(format!("§{:x}{line}:19", 19)),
            "line {line}"
        );
    }
}

#[test]
fn rotation_driven_from_another_thread() {
    let panel = Arc::new(panel_with(PanelConfig::default()));
    let driver = {
        let panel = Arc::clone(&panel);
        thread::spawn(move || {
            for _ in 0..10 {
                panel.set_next_title().unwrap();
            }
        })
    };
    panel.set_text(1, "still writable").unwrap();
    driver.join().unwrap();

    let title = panel.current_title().unwrap();
    assert!(title == "§6§lArena" || title == "§e§lArena");
    assert_eq!(panel.text(1).as_deref(), Some("still writable"));
}

proptest! {
    #[test]
    fn team_fields_respect_field_length(text in "[a-z §0-9lr]{0,60}", line in 1usize..=15) {
        let panel = panel_with(PanelConfig::default());
        panel.set_text(line, &text).unwrap();

        let team = panel.board().team(&format!("Line {line}")).unwrap();
        let max = ProtocolLimits::LEGACY.field_length();
        prop_assert!(team.prefix.chars().count() <= max);
        prop_assert!(team.suffix.chars().count() <= max);
        prop_assert!(!ends_with_dangling(&team.prefix));
        prop_assert!(!ends_with_dangling(&team.suffix));
        prop_assert_eq!(panel.text(line), Some(text));
    }
}
