//! Reference validity predicates.

use frontier_core::{Label, PointId};
use frontier_policy::{FlipContext, ValidityPredicate};

/// Accepts every flip. Topology may change freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysValid;

impl ValidityPredicate for AlwaysValid {
    fn name(&self) -> &str {
        "always_valid"
    }

    fn is_valid(&self, _ctx: &FlipContext<'_>, _p: PointId, _new_label: Label) -> bool {
        true
    }
}

/// Accepts a flip only when the point is simple under the topology's
/// adjacency pair, so the numbers of foreground and background components
/// never change.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimplePoint;

impl ValidityPredicate for SimplePoint {
    fn name(&self) -> &str {
        "simple_point"
    }

    fn is_valid(&self, ctx: &FlipContext<'_>, p: PointId, _new_label: Label) -> bool {
        ctx.topology().is_simple(ctx.labels(), p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_core::{StepId, INSIDE, OUTSIDE};
    use frontier_space::DigitalTopology;
    use frontier_test_utils::grid_from_rows;

    #[test]
    fn always_valid_accepts_anything() {
        let (domain, labels) = grid_from_rows(&["#.", ".#"]);
        let topo = DigitalTopology::standard(domain).unwrap();
        let ctx = FlipContext::new(&topo, &labels, StepId(1));
        assert!(AlwaysValid.is_valid(&ctx, PointId(0), OUTSIDE));
        assert!(AlwaysValid.is_valid(&ctx, PointId(1), INSIDE));
    }

    #[test]
    fn simple_point_guards_splits_and_merges() {
        let (domain, labels) = grid_from_rows(&[
            ".....", //
            "#####", //
            ".....", //
            "..#..", //
            ".....",
        ]);
        let topo = DigitalTopology::standard(domain.clone()).unwrap();
        let ctx = FlipContext::new(&topo, &labels, StepId(1));
        let bar_middle = domain.index_of(&[1, 2]).unwrap();
        let bridge = domain.index_of(&[2, 2]).unwrap();
        let bar_end = domain.index_of(&[1, 0]).unwrap();
        let grow = domain.index_of(&[0, 2]).unwrap();
        // Removing the middle of the bar splits it.
        assert!(!SimplePoint.is_valid(&ctx, bar_middle, OUTSIDE));
        // Filling the gap merges the bar and the dot.
        assert!(!SimplePoint.is_valid(&ctx, bridge, INSIDE));
        assert!(SimplePoint.is_valid(&ctx, bar_end, OUTSIDE));
        assert!(SimplePoint.is_valid(&ctx, grow, INSIDE));
    }
}
