//! Property-based invariant tests for the placement engine.
//!
//! 1. Every item stays inside its breakpoint's columns after any sequence of
//!    drops and keyboard moves.
//! 2. Ids stay unique within each breakpoint.
//! 3. A drop puts the new item first and moves no item sideways.
//! 4. Up/left moves never underflow and down moves always advance.

use gridkit_layout::placement;
use gridkit_layout::{
    Breakpoint, Direction, DropRequest, LayoutDocument, WidgetDefaults, WidgetDefinition,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Drop {
        bp: Breakpoint,
        x: u32,
        y: u32,
        w: Option<u32>,
        h: Option<u32>,
        default_w: u32,
        default_h: u32,
    },
    Move {
        bp: Breakpoint,
        pick: usize,
        direction: Direction,
    },
}

fn breakpoint() -> impl Strategy<Value = Breakpoint> {
    prop::sample::select(Breakpoint::ALL.to_vec())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(vec![
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ])
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (
            breakpoint(),
            0u32..8,
            0u32..12,
            prop::option::of(1u32..6),
            prop::option::of(1u32..6),
            1u32..6,
            1u32..6,
        )
            .prop_map(|(bp, x, y, w, h, default_w, default_h)| Op::Drop {
                bp,
                x,
                y,
                w,
                h,
                default_w,
                default_h,
            }),
        (breakpoint(), 0usize..16, direction())
            .prop_map(|(bp, pick, direction)| Op::Move { bp, pick, direction }),
    ]
}

fn apply(doc: &LayoutDocument, op: &Op) -> LayoutDocument {
    match op {
        Op::Drop {
            bp,
            x,
            y,
            w,
            h,
            default_w,
            default_h,
        } => {
            let def = WidgetDefinition {
                defaults: WidgetDefaults::new(*default_w, *default_h),
                config: serde_json::Value::Null,
            };
            let request = DropRequest {
                widget_type: "tile".to_string(),
                x: *x,
                y: *y,
                w: *w,
                h: *h,
            };
            placement::drop_widget(doc, *bp, &request, &def).document
        }
        Op::Move { bp, pick, direction } => {
            let items = doc.items(*bp);
            if items.is_empty() {
                return doc.clone();
            }
            let id = items[pick % items.len()].id.clone();
            placement::move_item(doc, *bp, &id, *direction).unwrap_or_else(|| doc.clone())
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1 + 2. Column bounds and id uniqueness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn items_stay_within_columns(ops in prop::collection::vec(op(), 1..24)) {
        let mut doc = LayoutDocument::new();
        for op in &ops {
            doc = apply(&doc, op);
            prop_assert!(doc.validate().is_ok(), "invalid after {:?}: {:?}", op, doc.validate());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Drop ordering and horizontal stability
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drop_prepends_and_keeps_columns(
        setup in prop::collection::vec(op(), 0..12),
        bp in breakpoint(),
        x in 0u32..8,
        y in 0u32..12,
    ) {
        let mut doc = LayoutDocument::new();
        for op in &setup {
            doc = apply(&doc, op);
        }
        let def = WidgetDefinition {
            defaults: WidgetDefaults::new(1, 2),
            config: serde_json::Value::Null,
        };
        let outcome = placement::drop_widget(&doc, bp, &DropRequest::at("tile", x, y), &def);

        for (each, items) in outcome.document.iter() {
            let before = doc.items(each);
            prop_assert_eq!(items.len(), before.len() + 1);
            prop_assert_eq!(&items[0].id, &outcome.id);
            for (old, new) in before.iter().zip(&items[1..]) {
                prop_assert_eq!(&old.id, &new.id);
                prop_assert_eq!(old.x, new.x);
                prop_assert!(new.y == old.y || new.y == old.y + old.h);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Move clamps
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn moves_clamp_at_origin(x in 0u32..4, y in 0u32..4, direction in direction()) {
        let def = WidgetDefinition {
            defaults: WidgetDefaults::new(1, 1),
            config: serde_json::Value::Null,
        };
        let outcome = placement::drop_widget(
            &LayoutDocument::new(),
            Breakpoint::Xl,
            &DropRequest::at("tile", x, y),
            &def,
        );
        let before = outcome.document.find(Breakpoint::Xl, &outcome.id).unwrap().clone();
        let moved = placement::move_item(&outcome.document, Breakpoint::Xl, &outcome.id, direction)
            .unwrap();
        let after = moved.find(Breakpoint::Xl, &outcome.id).unwrap();

        match direction {
            Direction::Up => prop_assert_eq!(after.y, before.y.saturating_sub(1)),
            Direction::Down => prop_assert_eq!(after.y, before.y + 1),
            Direction::Left => prop_assert_eq!(after.x, before.x.saturating_sub(1)),
            Direction::Right => prop_assert_eq!(after.x, (before.x + 1).min(4 - before.w)),
        }
    }
}
