use crate::{Config, ControlIntent, Cooldowns, Events, Footballer, Side, UltimateStrike};
use hecs::World;
use log::debug;

/// Start an ultimate for the first human side that asks for one
///
/// Only one marker may be falling at a time, and a bound caster cannot cast.
pub fn cast_ultimate(
    world: &mut World,
    strike: &mut Option<UltimateStrike>,
    config: &Config,
    events: &mut Events,
) {
    if strike.is_some() {
        return;
    }

    let targets: Vec<(Side, glam::Vec2)> = world
        .query::<&Footballer>()
        .iter()
        .map(|(_e, f)| (f.side, f.center()))
        .collect();

    let mut casters: Vec<_> = world
        .query_mut::<(&Footballer, &mut ControlIntent, &mut Cooldowns)>()
        .into_iter()
        .collect();
    casters.sort_by_key(|(_e, (f, _, _))| f.side);

    for (_entity, (footballer, intent, cooldowns)) in casters {
        if !intent.ultimate_armed() || cooldowns.ultimate > 0 || cooldowns.is_bound() {
            continue;
        }
        let target = footballer.side.opponent();
        let Some(&(_, center)) = targets.iter().find(|(side, _)| *side == target) else {
            continue;
        };

        intent.latch_ultimate();
        cooldowns.ultimate = config.ultimate_cooldown;
        *strike = Some(UltimateStrike::new(footballer.side, center));
        events.ultimate_cast = true;
        debug!("{:?} cast ultimate at {:?}", footballer.side, target);
        return;
    }
}

/// Let the falling marker descend; on arrival the target becomes bound
pub fn advance_strike(
    world: &mut World,
    strike: &mut Option<UltimateStrike>,
    config: &Config,
    events: &mut Events,
) {
    let Some(marker) = strike.as_mut() else {
        return;
    };
    if !marker.advance() {
        return;
    }

    let target = marker.target;
    for (_entity, (footballer, cooldowns)) in world.query_mut::<(&Footballer, &mut Cooldowns)>() {
        if footballer.side == target {
            cooldowns.bound = config.bound_duration;
        }
    }
    *strike = None;
    events.bound_applied = true;
    debug!("{:?} bound for {} ticks", target, config.bound_duration);
}
