//! Contact passes.
//!
//! Two passes run at the start of every frame, before any listener or object
//! update:
//!
//! - [`solid_contact_pass`] pushes each [`Actor`] out of every enabled
//!   [`SolidBody`] it overlaps, sets the actor's standing/pushing state and
//!   appends one [`ContactRecord`] per actor to the provider's
//!   [`SolidContacts`].
//! - [`touch_contact_pass`] records which actors overlap each [`Hitbox`].
//!
//! Providers already marked [`Destroyed`] are skipped, so a provider
//! destroyed during a frame still keeps the contacts it was handed that
//! frame but takes no part in the next one.
//!
//! [`hurt_on_touch`] is the generic listener for harmful hitboxes.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::Actor;
use crate::components::contact::{ContactRecord, SolidContact, SolidContacts, TouchContacts};
use crate::components::destroyed::Destroyed;
use crate::components::hitbox::{HitKind, Hitbox};
use crate::components::mapposition::MapPosition;
use crate::components::solidbody::SolidBody;
use crate::events::audio::{SoundCmd, SoundEffect};
use crate::resources::frametick::FrameTick;

/// How deep below a one-way platform's top edge feet may be and still land.
pub const PLATFORM_CATCH_DEPTH: i32 = 16;

/// Position change a solid contact applies to the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjustment {
    /// Put the feet on `top`.
    Land { top: i32 },
    /// Put the head under `bottom` and cancel upward motion.
    HeadBump { bottom: i32 },
    /// Move the center to `x`; `stop` cancels horizontal speed.
    Side { x: i32, stop: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub contact: SolidContact,
    pub adjustment: Adjustment,
}

impl Resolution {
    pub fn apply(self, actor: &mut Actor, provider: Entity) {
        match self.adjustment {
            Adjustment::Land { top } => actor.land_on(provider, top),
            Adjustment::HeadBump { bottom } => {
                actor.y = bottom + actor.y_radius;
                if actor.y_vel < 0 {
                    actor.y_vel = 0;
                    actor.y_sub = 0;
                }
            }
            Adjustment::Side { x, stop } => {
                actor.x = x;
                if stop {
                    actor.x_vel = 0;
                    actor.x_sub = 0;
                }
                if self.contact == SolidContact::Pushing {
                    actor.pushing = true;
                }
            }
        }
    }
}

/// Classifies an actor against one solid body.
///
/// `was_standing` selects the ground half height for an actor that stood on
/// this body last frame. Returns `None` when there is no contact.
pub fn classify_solid_contact(
    position: MapPosition,
    body: &SolidBody,
    actor: &Actor,
    was_standing: bool,
) -> Option<Resolution> {
    let center_x = position.x + body.offset_x;
    let center_y = position.y + body.offset_y;

    let left = center_x - body.half_width - actor.push_radius;
    let right = center_x + body.half_width + actor.push_radius;
    if actor.x <= left || actor.x >= right {
        return None;
    }

    let half_height = body.half_height(was_standing);
    let top = center_y - half_height;
    let bottom = center_y + half_height;
    let top_pen = actor.feet() - top;
    let bottom_pen = bottom - (actor.y - actor.y_radius);
    if top_pen < 0 || bottom_pen <= 0 {
        return None;
    }

    // Landing always rests on the ground height so that standing next
    // frame sees the feet exactly on the top edge.
    let land = Resolution {
        contact: SolidContact::Standing,
        adjustment: Adjustment::Land {
            top: center_y - body.ground_half_height,
        },
    };

    if body.top_solid_only {
        if actor.y_vel < 0 || top_pen > PLATFORM_CATCH_DEPTH {
            return None;
        }
        return Some(land);
    }

    let left_pen = actor.x - left;
    let right_pen = right - actor.x;
    let (x_pen, from_left) = if left_pen <= right_pen {
        (left_pen, true)
    } else {
        (right_pen, false)
    };
    let (y_pen, from_top) = if top_pen <= bottom_pen {
        (top_pen, true)
    } else {
        (bottom_pen, false)
    };

    if y_pen <= x_pen {
        if from_top {
            if actor.y_vel < 0 {
                return None;
            }
            return Some(land);
        }
        return Some(Resolution {
            contact: SolidContact::TouchBottom,
            adjustment: Adjustment::HeadBump { bottom },
        });
    }

    let moving_in = if from_left {
        actor.x_vel > 0
    } else {
        actor.x_vel < 0
    };
    Some(Resolution {
        contact: if moving_in {
            SolidContact::Pushing
        } else {
            SolidContact::TouchSide
        },
        adjustment: Adjustment::Side {
            x: if from_left { left } else { right },
            stop: moving_in,
        },
    })
}

pub fn solid_contact_pass(
    tick: Res<FrameTick>,
    mut providers: Query<
        (Entity, &MapPosition, &SolidBody, &mut SolidContacts),
        Without<Destroyed>,
    >,
    mut actors: Query<(Entity, &mut Actor)>,
) {
    for (_, _, _, mut contacts) in providers.iter_mut() {
        contacts.reset(tick.frame);
    }

    for (actor_entity, mut actor) in actors.iter_mut() {
        let previous = actor.standing_on.take();
        actor.pushing = false;

        for (provider, position, body, mut contacts) in providers.iter_mut() {
            if !body.is_solid_for(actor_entity) {
                continue;
            }
            let was_standing = previous == Some(provider);
            let Some(resolution) = classify_solid_contact(*position, body, &actor, was_standing)
            else {
                continue;
            };
            resolution.apply(&mut actor, provider);
            contacts.push(ContactRecord {
                actor: actor_entity,
                contact: resolution.contact,
                frame: tick.frame,
            });
        }

        if previous.is_some() && actor.standing_on.is_none() && !actor.airborne {
            // Walked or was carried off the edge.
            actor.airborne = true;
        }
    }
}

pub fn touch_contact_pass(
    tick: Res<FrameTick>,
    mut hitboxes: Query<(&MapPosition, &Hitbox, &mut TouchContacts), Without<Destroyed>>,
    actors: Query<(Entity, &Actor)>,
) {
    for (position, hitbox, mut touches) in hitboxes.iter_mut() {
        touches.reset(tick.frame);
        for (actor_entity, actor) in actors.iter() {
            if hitbox.overlaps(
                position.x,
                position.y,
                actor.x,
                actor.y,
                actor.hit_half_width,
                actor.hit_half_height,
            ) {
                touches.actors.push(actor_entity);
            }
        }
    }
}

/// Hurts every actor touching a harmful hitbox this frame.
pub fn hurt_on_touch(
    hitboxes: Query<(&MapPosition, &Hitbox, &TouchContacts), Without<Destroyed>>,
    mut actors: Query<&mut Actor>,
    mut sounds: MessageWriter<SoundCmd>,
) {
    for (position, hitbox, touches) in hitboxes.iter() {
        if hitbox.kind != HitKind::Harmful {
            continue;
        }
        for &actor_entity in &touches.actors {
            if let Ok(mut actor) = actors.get_mut(actor_entity)
                && actor.hurt_from(position.x)
            {
                debug!("actor {:?} hurt at x={}", actor_entity, position.x);
                sounds.write(SoundCmd::new(SoundEffect::Hurt));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor_at(x: i32, y: i32) -> Actor {
        Actor::new(x, y)
    }

    #[test]
    fn falling_onto_a_box_lands() {
        let body = SolidBody::new(16, 16);
        let mut actor = actor_at(100, 100 - 16 - 19 + 3).with_velocity(0, 0x200);
        let resolution = classify_solid_contact(MapPosition::new(100, 100), &body, &actor, false)
            .expect("contact");
        assert_eq!(resolution.contact, SolidContact::Standing);
        resolution.apply(&mut actor, Entity::PLACEHOLDER);
        assert_eq!(actor.feet(), 84);
        assert_eq!(actor.y_vel, 0);
        assert!(!actor.airborne);
    }

    #[test]
    fn walking_into_a_side_pushes() {
        let body = SolidBody::new(16, 16);
        let mut actor = actor_at(100 - 16 - 10 + 2, 100).with_velocity(0x300, 0);
        actor.airborne = false;
        let resolution = classify_solid_contact(MapPosition::new(100, 100), &body, &actor, false)
            .expect("contact");
        assert_eq!(resolution.contact, SolidContact::Pushing);
        resolution.apply(&mut actor, Entity::PLACEHOLDER);
        assert_eq!(actor.x, 74);
        assert_eq!(actor.x_vel, 0);
        assert!(actor.pushing);
    }

    #[test]
    fn side_overlap_without_inward_motion_only_touches() {
        let body = SolidBody::new(16, 16);
        let actor = actor_at(100 + 16 + 10 - 2, 100).with_velocity(0x100, 0);
        let resolution = classify_solid_contact(MapPosition::new(100, 100), &body, &actor, false)
            .expect("contact");
        assert_eq!(resolution.contact, SolidContact::TouchSide);
        assert_eq!(
            resolution.adjustment,
            Adjustment::Side {
                x: 126,
                stop: false
            }
        );
    }

    #[test]
    fn jumping_into_the_underside_bumps_the_head() {
        let body = SolidBody::new(32, 8);
        let mut actor = actor_at(100, 108 + 19 - 2).with_velocity(0, -0x400);
        let resolution = classify_solid_contact(MapPosition::new(100, 100), &body, &actor, false)
            .expect("contact");
        assert_eq!(resolution.contact, SolidContact::TouchBottom);
        resolution.apply(&mut actor, Entity::PLACEHOLDER);
        assert_eq!(actor.y, 127);
        assert_eq!(actor.y_vel, 0);
    }

    #[test]
    fn edges_are_exclusive() {
        let body = SolidBody::new(16, 16);
        let beside = actor_at(100 - 26, 100);
        assert!(classify_solid_contact(MapPosition::new(100, 100), &body, &beside, false).is_none());
        let above = actor_at(100, 100 - 16 - 19 - 1);
        assert!(classify_solid_contact(MapPosition::new(100, 100), &body, &above, false).is_none());
    }

    #[test]
    fn top_only_platform_reports_only_standing() {
        let body = SolidBody::platform(32, 8);
        let position = MapPosition::new(0, 0);
        for x in -45..=45 {
            for y in -40..=40 {
                for y_vel in [-0x300i16, 0, 0x300] {
                    for x_vel in [-0x300i16, 0, 0x300] {
                        let actor = actor_at(x, y).with_velocity(x_vel, y_vel);
                        if let Some(resolution) =
                            classify_solid_contact(position, &body, &actor, false)
                        {
                            assert_eq!(resolution.contact, SolidContact::Standing);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn top_only_platform_lets_actor_pass_from_below() {
        let body = SolidBody::platform(32, 8);
        let rising = actor_at(0, 10).with_velocity(0, -0x400);
        assert!(classify_solid_contact(MapPosition::new(0, 0), &body, &rising, false).is_none());
        let deep = actor_at(0, 10).with_velocity(0, 0x100);
        assert!(classify_solid_contact(MapPosition::new(0, 0), &body, &deep, false).is_none());
    }

    #[test]
    fn standing_uses_ground_height() {
        let body = SolidBody::new(16, 8).with_ground_half_height(9);
        let actor = actor_at(0, -9 - 19);
        assert!(classify_solid_contact(MapPosition::new(0, 0), &body, &actor, false).is_none());
        let resolution =
            classify_solid_contact(MapPosition::new(0, 0), &body, &actor, true).expect("contact");
        assert_eq!(resolution.adjustment, Adjustment::Land { top: -9 });
    }
}
