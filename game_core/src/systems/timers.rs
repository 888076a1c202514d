use crate::Cooldowns;
use hecs::World;

/// Count every footballer's cooldown timers down by one tick
pub fn tick_cooldowns(world: &mut World) {
    for (_entity, cooldowns) in world.query_mut::<&mut Cooldowns>() {
        cooldowns.tick();
    }
}
