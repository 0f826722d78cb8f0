//! Object behavior integration tests.
//!
//! Each test builds a [`Simulation`], places objects and a stationary actor
//! directly in the world and steps whole frames. No actor integrator runs,
//! so the actor only moves when an object moves it.

use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;

use platformer_objects::components::actor::{Actor, HURT_X_VEL, HURT_Y_VEL, MainActor};
use platformer_objects::components::destroyed::Destroyed;
use platformer_objects::components::mapposition::MapPosition;
use platformer_objects::components::objectkind::Kind;
use platformer_objects::components::solidbody::SolidBody;
use platformer_objects::components::sprite::Sprite;
use platformer_objects::events::audio::SoundEffect;
use platformer_objects::objects::animal::{Animal, AnimalState};
use platformer_objects::objects::bubble::Bubble;
use platformer_objects::objects::button::Button;
use platformer_objects::objects::capsule::{Capsule, CapsuleState};
use platformer_objects::objects::collapsing::{CollapseState, CollapsingPlatform};
use platformer_objects::objects::projectile::{Projectile, ProjectileState};
use platformer_objects::objects::ring::Ring;
use platformer_objects::objects::shooter::{Shooter, ShooterState};
use platformer_objects::objects::sparkle::Sparkle;
use platformer_objects::objects::spikes::{SpikeState, Spikes};
use platformer_objects::objects::spring::{COOLDOWN, Spring, SpringState};
use platformer_objects::objects::swing::SwingPlatform;
use platformer_objects::simulation::Simulation;

const Y_RADIUS: i32 = 19;

fn setup() -> (Simulation, Receiver<SoundEffect>) {
    let mut sim = Simulation::default();
    let rx = sim.connect_audio();
    (sim, rx)
}

/// Actor whose feet are one pixel below `top`, falling slowly.
fn spawn_actor_landing_on(sim: &mut Simulation, x: i32, top: i32) -> Entity {
    sim.world_mut()
        .spawn(Actor::new(x, top + 1 - Y_RADIUS).with_velocity(0, 0x100))
        .id()
}

fn actor(sim: &Simulation, entity: Entity) -> Actor {
    sim.world().get::<Actor>(entity).expect("actor").clone()
}

fn count<C: Component>(sim: &mut Simulation) -> usize {
    let world = sim.world_mut();
    world.query::<&C>().iter(world).count()
}

fn sounds(rx: &Receiver<SoundEffect>) -> Vec<SoundEffect> {
    rx.try_iter().collect()
}

#[test]
fn spring_launches_then_ignores_actor_until_cooldown_ends() {
    let (mut sim, rx) = setup();
    let spring = sim.spawn(Kind::Spring, 0, 160, 150, false);
    let actor_entity = spawn_actor_landing_on(&mut sim, 160, 142);

    sim.step();
    let launched = actor(&sim, actor_entity);
    assert_eq!(launched.y_vel, -0x1000);
    assert!(launched.airborne);
    assert_eq!(launched.standing_on, None);
    assert_eq!(sounds(&rx), vec![SoundEffect::Spring]);
    assert!(sim.world().get::<Spring>(spring).unwrap().phase.is(SpringState::Launched));
    assert_eq!(sim.world().get::<SolidBody>(spring).unwrap().exempt, Some(actor_entity));

    // The launch frame already counts down once; the spring rearms on the
    // first negative crossing.
    sim.run_frames(COOLDOWN as u64 - 1);
    assert!(sim.world().get::<Spring>(spring).unwrap().phase.is(SpringState::Launched));
    sim.step();
    assert!(sim.world().get::<Spring>(spring).unwrap().phase.is(SpringState::Idle));
    assert_eq!(sim.world().get::<SolidBody>(spring).unwrap().exempt, None);

    // Still moving up: the spring does not catch it again.
    sim.step();
    assert!(sounds(&rx).is_empty());
}

#[test]
fn weak_spring_subtype_and_clamped_subtype() {
    let (mut sim, _rx) = setup();
    let weak = sim.spawn(Kind::Spring, 1, 100, 150, false);
    let clamped = sim.spawn(Kind::Spring, 0x0F, 200, 150, false);
    assert_eq!(sim.world().get::<Spring>(weak).unwrap().strength, -0x0A00);
    assert_eq!(sim.world().get::<Spring>(clamped).unwrap().strength, -0x0A00);
}

#[test]
fn upright_spikes_hurt_an_actor_landing_on_them() {
    let (mut sim, rx) = setup();
    sim.spawn(Kind::Spikes, 0, 160, 150, false);
    let actor_entity = spawn_actor_landing_on(&mut sim, 160, 134);

    sim.step();
    let hurt = actor(&sim, actor_entity);
    assert!(hurt.hurt);
    assert_eq!(hurt.y_vel, HURT_Y_VEL);
    assert_eq!(hurt.x_vel, HURT_X_VEL);
    assert_eq!(sounds(&rx), vec![SoundEffect::Hurt]);

    // Invulnerable while the knockback plays out.
    sim.step();
    assert!(sounds(&rx).is_empty());
}

#[test]
fn upright_spikes_are_harmless_from_the_side() {
    let (mut sim, rx) = setup();
    sim.spawn(Kind::Spikes, 0, 160, 150, false);
    // Body spans x 152..168; the push radius adds 10 on each side.
    let actor_entity = sim
        .world_mut()
        .spawn(Actor::new(144, 150).with_velocity(0x100, 0))
        .id();

    sim.step();
    let pushed = actor(&sim, actor_entity);
    assert!(!pushed.hurt);
    assert!(pushed.pushing);
    assert_eq!(pushed.x, 142);
    assert_eq!(pushed.x_vel, 0);
    assert!(sounds(&rx).is_empty());
}

#[test]
fn sideways_spikes_hurt_on_side_contact() {
    let (mut sim, rx) = setup();
    sim.spawn(Kind::Spikes, 0x02, 160, 150, false);
    let actor_entity = sim
        .world_mut()
        .spawn(Actor::new(136, 150).with_velocity(0x100, 0))
        .id();

    sim.step();
    let hurt = actor(&sim, actor_entity);
    assert!(hurt.hurt);
    assert_eq!(hurt.x_vel, -HURT_X_VEL);
    assert_eq!(sounds(&rx), vec![SoundEffect::Hurt]);
}

#[test]
fn retracting_spikes_slide_down_after_waiting() {
    let (mut sim, rx) = setup();
    let spikes = sim.spawn(Kind::Spikes, 0x01, 160, 150, false);

    sim.run_frames(60);
    assert!(sim.world().get::<Spikes>(spikes).unwrap().phase.is(SpikeState::Extended));
    sim.step();
    assert!(sim.world().get::<Spikes>(spikes).unwrap().phase.is(SpikeState::Retracting));
    assert_eq!(sounds(&rx), vec![SoundEffect::SpikesMove]);

    sim.run_frames(4);
    assert!(sim.world().get::<Spikes>(spikes).unwrap().phase.is(SpikeState::Retracted));
    assert_eq!(sim.world().get::<MapPosition>(spikes).unwrap().y, 182);
}

#[test]
fn retracting_spikes_off_screen_move_silently() {
    let (mut sim, rx) = setup();
    let spikes = sim.spawn(Kind::Spikes, 0x01, 2000, 150, false);
    sim.run_frames(61);
    assert!(sim.world().get::<Spikes>(spikes).unwrap().phase.is(SpikeState::Retracting));
    assert!(sounds(&rx).is_empty());
}

#[test]
fn button_opens_capsule_and_animals_leave_in_order() {
    let (mut sim, rx) = setup();
    let capsule = sim.spawn(Kind::Capsule, 0, 160, 150, false);

    // First update spawns the button on top of the capsule.
    sim.step();
    let button = sim.world().get::<Capsule>(capsule).unwrap().button.expect("button");
    assert_eq!(sim.world().get::<MapPosition>(button).unwrap().y, 122);

    let actor_entity = spawn_actor_landing_on(&mut sim, 160, 118);
    sim.step();
    assert!(sim.world().get::<Button>(button).unwrap().pressed);
    assert_eq!(sim.world().get::<MapPosition>(button).unwrap().y, 126);
    assert_eq!(actor(&sim, actor_entity).y, 103);
    assert!(sim.world().get::<Capsule>(capsule).unwrap().phase.is(CapsuleState::Opening));
    assert_eq!(
        sounds(&rx),
        vec![SoundEffect::Button, SoundEffect::CapsuleExplode]
    );
    assert_eq!(count::<Animal>(&mut sim), 8);
    assert_eq!(count::<Sparkle>(&mut sim), 8);

    let animals = sim.world().get::<Capsule>(capsule).unwrap().animals.clone();
    let state = |sim: &Simulation, index: usize| {
        sim.world().get::<Animal>(animals[index]).unwrap().phase.current()
    };

    sim.run_frames(30);
    assert!(!sim.world().get::<Capsule>(capsule).unwrap().is_activated());
    assert_eq!(state(&sim, 0), AnimalState::Prison);

    sim.step();
    assert!(sim.world().get::<Capsule>(capsule).unwrap().is_activated());
    assert!(sounds(&rx).contains(&SoundEffect::CapsuleOpen));
    assert_eq!(state(&sim, 0), AnimalState::Fall);
    assert_eq!(state(&sim, 1), AnimalState::Prison);

    sim.run_frames(7);
    assert_eq!(state(&sim, 1), AnimalState::Prison);
    sim.step();
    assert_eq!(state(&sim, 1), AnimalState::Fall);
    assert_eq!(state(&sim, 2), AnimalState::Prison);
}

#[test]
fn orphaned_animals_stay_caged() {
    let (mut sim, _rx) = setup();
    let capsule = sim.spawn(Kind::Capsule, 0, 160, 150, false);
    sim.step();
    spawn_actor_landing_on(&mut sim, 160, 118);
    sim.step();
    let animals = sim.world().get::<Capsule>(capsule).unwrap().animals.clone();

    sim.world_mut().entity_mut(capsule).despawn();
    sim.run_frames(60);
    for animal in animals {
        assert!(sim.world().get::<Animal>(animal).unwrap().phase.is(AnimalState::Prison));
    }
}

#[test]
fn animals_ignore_a_capsule_marked_destroyed() {
    let (mut sim, _rx) = setup();
    let capsule = sim.spawn(Kind::Capsule, 0, 160, 150, false);
    sim.step();
    spawn_actor_landing_on(&mut sim, 160, 118);
    sim.step();
    let animals = sim.world().get::<Capsule>(capsule).unwrap().animals.clone();

    sim.run_frames(31);
    assert!(sim.world().get::<Capsule>(capsule).unwrap().is_activated());
    let waiting = sim.world().get::<Animal>(animals[1]).unwrap().delay.remaining;

    sim.world_mut().entity_mut(capsule).insert(Destroyed);
    sim.step();
    let caged = sim.world().get::<Animal>(animals[1]).unwrap();
    assert!(caged.phase.is(AnimalState::Prison));
    assert_eq!(caged.delay.remaining, waiting);
    assert!(sim.world().get_entity(capsule).is_err());
}

#[test]
fn free_animal_lands_and_walks() {
    let (mut sim, _rx) = setup();
    sim.set_terrain(platformer_objects::resources::terrain::FlatTerrain::new(200));
    let animal = sim.spawn(Kind::Animal, 0, 100, 150, false);

    sim.run_frames(60);
    let state = sim.world().get::<Animal>(animal).unwrap();
    assert!(state.phase.is(AnimalState::Walk));
    assert!(sim.world().get::<MapPosition>(animal).unwrap().x > 100);
}

#[test]
fn shooter_engages_at_sixty_three_and_releases_after_charging() {
    let (mut sim, rx) = setup();
    let shooter = sim.spawn(Kind::Shooter, 0, 160, 100, false);
    let target = sim.world_mut().spawn((Actor::new(224, 100), MainActor)).id();
    assert!(sim.world().get::<Sprite>(shooter).unwrap().flip_h);

    sim.step();
    assert!(sim.world().get::<Shooter>(shooter).unwrap().phase.is(ShooterState::Idle));

    sim.world_mut().get_mut::<Actor>(target).unwrap().x = 223;
    sim.step();
    let charging = sim.world().get::<Shooter>(shooter).unwrap().clone();
    assert!(charging.phase.is(ShooterState::Charging));
    assert!(charging.facing_right);
    // Sheets face right; only left-facing sprites are mirrored.
    assert!(!sim.world().get::<Sprite>(shooter).unwrap().flip_h);
    let projectile = charging.projectile.expect("projectile");
    assert_eq!(sim.world().get::<MapPosition>(projectile).unwrap().x, 172);
    assert!(!sim.world().get::<Sprite>(projectile).unwrap().flip_h);

    sim.run_frames(20);
    assert!(sim.world().get::<Projectile>(projectile).unwrap().phase.is(ProjectileState::Held));
    assert_eq!(sim.world().get::<MapPosition>(projectile).unwrap().x, 172);

    sim.step();
    assert!(sim.world().get::<Shooter>(shooter).unwrap().has_released());
    assert!(sim.world().get::<Projectile>(projectile).unwrap().phase.is(ProjectileState::Flying));
    assert_eq!(sim.world().get::<MapPosition>(projectile).unwrap().x, 174);
    assert_eq!(sounds(&rx), vec![SoundEffect::Shoot]);

    // The shot travels until it touches the actor, hurting it.
    for _ in 0..40 {
        sim.step();
    }
    assert!(sim.world().get_entity(projectile).is_err());
    assert!(actor(&sim, target).hurt);
    assert!(sounds(&rx).contains(&SoundEffect::Hurt));
}

#[test]
fn collapsing_platform_drops_on_first_negative_crossing() {
    let (mut sim, rx) = setup();
    let platform = sim.spawn(Kind::CollapsingPlatform, 2, 160, 150, false);
    let actor_entity = spawn_actor_landing_on(&mut sim, 160, 142);

    sim.run_frames(7);
    let shaking = sim.world().get::<CollapsingPlatform>(platform).unwrap();
    assert!(shaking.phase.is(CollapseState::Shaking));
    assert_eq!(actor(&sim, actor_entity).standing_on, Some(platform));

    sim.step();
    assert!(
        sim.world()
            .get::<CollapsingPlatform>(platform)
            .unwrap()
            .phase
            .is(CollapseState::Falling)
    );
    assert!(!sim.world().get::<SolidBody>(platform).unwrap().enabled);
    assert_eq!(sounds(&rx), vec![SoundEffect::Collapse]);

    sim.step();
    let falling = actor(&sim, actor_entity);
    assert!(falling.airborne);
    assert_eq!(falling.standing_on, None);
    assert!(sim.world().get::<MapPosition>(platform).unwrap().y >= 150);
}

#[test]
fn swing_platform_carries_standing_actor() {
    let (mut sim, _rx) = setup();
    let platform = sim.spawn(Kind::SwingPlatform, 0x34, 160, 150, false);
    let actor_entity = spawn_actor_landing_on(&mut sim, 160, 142);

    for _ in 0..40 {
        sim.step();
        let position = *sim.world().get::<MapPosition>(platform).unwrap();
        let carried = actor(&sim, actor_entity);
        assert_eq!(carried.x, position.x);
        assert_eq!(carried.y + Y_RADIUS, 142);
    }
    assert_ne!(sim.world().get::<MapPosition>(platform).unwrap().x, 160);
}

#[test]
fn vertical_swing_platform_keeps_actor_on_top() {
    let (mut sim, _rx) = setup();
    let platform = sim.spawn(Kind::SwingPlatform, 0x35, 160, 150, false);
    let actor_entity = spawn_actor_landing_on(&mut sim, 160, 142);
    assert!(sim.world().get::<SwingPlatform>(platform).unwrap().vertical);

    for _ in 0..40 {
        sim.step();
        let position = *sim.world().get::<MapPosition>(platform).unwrap();
        assert_eq!(actor(&sim, actor_entity).y + Y_RADIUS, position.y - 8);
    }
}

#[test]
fn rings_alternate_sound_channels_and_disappear() {
    let (mut sim, rx) = setup();
    let first = sim.spawn(Kind::Ring, 0, 100, 100, false);
    let second = sim.spawn(Kind::Ring, 0, 104, 100, false);
    let actor_entity = sim.world_mut().spawn(Actor::new(102, 100)).id();

    sim.step();
    assert_eq!(actor(&sim, actor_entity).rings, 2);
    assert_eq!(sounds(&rx), vec![SoundEffect::RingLeft, SoundEffect::RingRight]);

    // Sparkling rings cannot be collected again.
    sim.step();
    assert_eq!(actor(&sim, actor_entity).rings, 2);

    sim.run_frames(40);
    assert!(sim.world().get_entity(first).is_err());
    assert!(sim.world().get_entity(second).is_err());
}

#[test]
fn hurt_actor_cannot_collect_rings() {
    let (mut sim, rx) = setup();
    let ring = sim.spawn(Kind::Ring, 0, 100, 100, false);
    let mut hurt = Actor::new(100, 100);
    hurt.hurt = true;
    let actor_entity = sim.world_mut().spawn(hurt).id();

    sim.run_frames(3);
    assert_eq!(actor(&sim, actor_entity).rings, 0);
    assert!(sim.world().get::<Ring>(ring).is_some());
    assert!(sounds(&rx).is_empty());
}

#[test]
fn sparkle_spirals_inward_and_dies() {
    let (mut sim, _rx) = setup();
    let sparkle = sim.spawn(Kind::Sparkle, 0, 160, 100, false);
    assert_eq!(sim.world().get::<MapPosition>(sparkle).unwrap().x, 192);

    sim.run_frames(10);
    let alive = *sim.world().get::<Sparkle>(sparkle).unwrap();
    assert!(alive.radius.integer() > 0 && alive.radius.integer() < 32);

    sim.run_frames(30);
    assert!(sim.world().get_entity(sparkle).is_err());
}

#[test]
fn bubble_generator_spawns_only_while_visible() {
    let (mut sim, _rx) = setup();
    sim.spawn(Kind::BubbleGenerator, 0, 160, 150, false);
    sim.spawn(Kind::BubbleGenerator, 0, 2000, 150, false);

    sim.run_frames(32);
    assert_eq!(count::<Bubble>(&mut sim), 0);
    sim.step();
    assert_eq!(count::<Bubble>(&mut sim), 1);

    let world = sim.world_mut();
    let mut bubbles = world.query_filtered::<(&MapPosition, &Sprite), With<Bubble>>();
    let (position, sprite) = bubbles.single(world).expect("one bubble");
    assert!((152..=168).contains(&position.x));
    assert_eq!(sprite.sheet, "bubble");

    // The next interval is at least as long as the base one.
    sim.run_frames(32);
    assert_eq!(count::<Bubble>(&mut sim), 1);
}
