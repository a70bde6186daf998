//! Bevy plugin wiring the stack guard into the schedule.

use bevy::prelude::*;

use super::{mark_item_used, restore_guarded_stacks_system, StackGuardState};

/// Plugin installing the stack-count guard.
///
/// Independent of the aim-assist plugin; hosts can install either or both.
#[derive(Default)]
pub struct StackGuardPlugin;

impl Plugin for StackGuardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StackGuardState>();
        app.add_observer(mark_item_used);
        app.add_systems(Update, restore_guarded_stacks_system);
    }
}
