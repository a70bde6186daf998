//! Event-driven guard restoring stackable item counts after use.
//!
//! The assist package ships with a small companion feature: items marked
//! with [`GuardedStack`] get one charge refunded whenever a use consumes
//! one. The guard follows a subscribe/compare/restore pattern: it records
//! the last observed count per guarded item, watches for decreases, and
//! only refunds when the decrease follows a use event, so stack splits and
//! external edits pass through untouched.

mod plugin;

pub use plugin::StackGuardPlugin;

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use hashbrown::{HashMap, HashSet};
use log::debug;
use serde::Serialize;

/// Number of charges left in a stackable item.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackCount(pub u32);

/// Marker for items whose use should not consume a charge.
#[derive(Component, Debug, Clone, Copy, Default, Serialize)]
pub struct GuardedStack;

/// Raised by the host-facing inventory code when an item finishes its use.
#[derive(Event, Debug, Clone, Copy)]
pub struct ItemUsed {
    /// The item entity that was used.
    pub item: Entity,
}

/// Bookkeeping for guarded stacks.
#[derive(Resource, Default)]
pub struct StackGuardState {
    /// Last observed count per guarded item.
    pub(crate) last_counts: HashMap<Entity, u32>,
    /// Items used since their last count change.
    pub(crate) recently_used: HashSet<Entity>,
}

impl StackGuardState {
    /// Number of guarded items currently tracked.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.last_counts.len()
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub(crate) fn mark_item_used(
    event: On<ItemUsed>,
    guarded: Query<(), With<GuardedStack>>,
    mut state: ResMut<StackGuardState>,
) {
    let ItemUsed { item } = *event.event();
    if guarded.contains(item) {
        state.recently_used.insert(item);
    }
}

/// Compares guarded stack counts against the recorded values and refunds
/// one charge for each decrease that followed a use event.
///
/// Counts seen for the first time are recorded without judgement, covering
/// the initial inventory scan. Removed items are dropped from the state.
pub fn restore_guarded_stacks_system(
    mut state: ResMut<StackGuardState>,
    mut changed: Query<(Entity, &mut StackCount), (Changed<StackCount>, With<GuardedStack>)>,
    mut removed: RemovedComponents<StackCount>,
) {
    for entity in removed.read() {
        state.last_counts.remove(&entity);
        state.recently_used.remove(&entity);
    }

    for (entity, mut count) in changed.iter_mut() {
        let current = count.0;
        let Some(&previous) = state.last_counts.get(&entity) else {
            state.last_counts.insert(entity, current);
            continue;
        };
        if current < previous && state.recently_used.remove(&entity) {
            let restored = current + 1;
            count.0 = restored;
            state.last_counts.insert(entity, restored);
            debug!("stack on {entity:?} restored to {restored}");
            continue;
        }
        state.last_counts.insert(entity, current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn state_starts_empty() {
        let state = StackGuardState::default();
        assert_eq!(state.tracked(), 0);
        assert!(state.recently_used.is_empty());
    }

    #[rstest]
    fn plugin_is_default_constructible() {
        let _: StackGuardPlugin = StackGuardPlugin;
    }
}
