mod common;

use common::{courting, run, WorldBuilder};
use utopia_data::{BehaviorState, LiveEvent, Sex};

#[test]
fn test_adjacent_courting_pair_produces_offspring() {
    let (mut world, ids) = WorldBuilder::new()
        .with_config(|c| {
            c.simulation.initial_population = 2;
            c.simulation.birth_rate = 1.0;
        })
        .with_food_at(400.0, 300.0)
        .with_agent_where(401.0, 300.0, Sex::Male, courting)
        .with_agent_where(399.0, 300.0, Sex::Female, courting)
        .build();
    let before = world.resources()[0].amount();

    world.update();

    assert_population!(world, 3);
    assert_eq!(world.stats().births, 3);
    assert!(world.resources()[0].amount() < before);

    let child = &world.agents()[2];
    assert_eq!(child.parent_ids(), Some((ids[0], ids[1])));
    assert!(child.social_connections().contains(&ids[0]));
    assert!(child.social_connections().contains(&ids[1]));
    for parent in &ids {
        let p = world.agent(*parent).expect("parent alive");
        assert!(p.social_connections().contains(&child.id()));
        assert_ne!(p.state, BehaviorState::Mating);
    }

    let births: Vec<_> = world
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, LiveEvent::Birth { .. }))
        .collect();
    assert_eq!(births.len(), 1);
}

#[test]
fn test_same_sex_pair_never_reproduces() {
    let (mut world, _) = WorldBuilder::new()
        .with_config(|c| c.simulation.birth_rate = 1.0)
        .with_agent_where(100.0, 100.0, Sex::Female, courting)
        .with_agent_where(102.0, 100.0, Sex::Female, courting)
        .build();

    run(&mut world, 20);

    assert_population!(world, 2);
    assert_eq!(world.births(), 2);
}

#[test]
fn test_parents_pay_energy_cost() {
    let (mut world, ids) = WorldBuilder::new()
        .with_config(|c| c.simulation.birth_rate = 1.0)
        .without_food()
        .with_agent_where(200.0, 200.0, Sex::Male, courting)
        .with_agent_where(201.0, 200.0, Sex::Female, courting)
        .build();

    world.update();

    for id in ids {
        let energy = world.agent(id).expect("parent alive").energy();
        assert!((energy - (100.0 - 0.1 - 10.0)).abs() < 1e-9, "energy {energy}");
    }
    let child = &world.agents()[2];
    assert!((child.energy() - 50.0).abs() < 1e-9);
    assert!(child.hunger().abs() < 1e-9);
}

#[test]
fn test_agent_aged_1999_survives_one_tick() {
    let (mut world, ids) = WorldBuilder::new()
        .with_agent_where(100.0, 100.0, Sex::Male, |a| a.age = 1999.0)
        .build();

    world.update();

    assert_agent_alive!(world, ids[0]);
    assert_eq!(world.deaths().old_age, 0);
}

#[test]
fn test_agent_aged_2000_dies_of_old_age() {
    let (mut world, ids) = WorldBuilder::new()
        .with_agent_where(100.0, 100.0, Sex::Male, |a| a.age = 2000.0)
        .build();

    world.update();

    assert_agent_dead!(world, ids[0]);
    assert_eq!(world.deaths().old_age, 1);
    assert_eq!(world.deaths().total, 1);
}

#[test]
fn test_starvation_takes_exactly_100_ticks_from_80() {
    let (mut world, ids) = WorldBuilder::new()
        .without_food()
        .with_agent_where(100.0, 100.0, Sex::Female, |a| a.set_hunger(80.0))
        .build();

    run(&mut world, 99);
    assert_agent_alive!(world, ids[0]);
    assert_eq!(world.deaths().starvation, 0);

    world.update();
    assert_agent_dead!(world, ids[0]);
    assert_eq!(world.deaths().starvation, 1);

    let events = world.drain_events();
    let death = events
        .iter()
        .find(|e| matches!(e, LiveEvent::Death { .. }))
        .expect("death event");
    assert_eq!(death.tick(), 100);
}

#[test]
fn test_zero_regeneration_never_refills() {
    let (mut world, _) = WorldBuilder::new()
        .with_config(|c| {
            c.simulation.resource_spots = 4;
            c.simulation.resource_capacity = 400.0;
            c.simulation.resource_regeneration_rate = 0.0;
        })
        .with_seed(9)
        .build();
    for i in 0..4 {
        world
            .resource_mut(i)
            .expect("spot exists")
            .set_amount(f64::from(i as u32) * 10.0);
    }
    let before: Vec<f64> = world.resources().iter().map(|r| r.amount()).collect();

    run(&mut world, 200);

    for (r, b) in world.resources().iter().zip(before) {
        assert!(r.amount() <= b);
    }
}

#[test]
fn test_regeneration_caps_at_capacity() {
    let (mut world, _) = WorldBuilder::new()
        .with_config(|c| c.simulation.resource_regeneration_rate = 0.5)
        .build();
    world.resource_mut(0).expect("spot").set_amount(99.0);

    run(&mut world, 10);

    assert!((world.resources()[0].amount() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_tired_agent_rests_in_place_then_explores() {
    let (mut world, ids) = WorldBuilder::new()
        .without_food()
        .with_agent_where(300.0, 300.0, Sex::Male, |a| a.set_energy(10.0))
        .build();

    world.update();
    let agent = world.agent(ids[0]).expect("alive");
    assert_eq!(agent.state, BehaviorState::Resting);
    let resting_at = agent.position;

    world.update();
    assert_eq!(world.agent(ids[0]).expect("alive").position, resting_at);

    run(&mut world, 40);
    let agent = world.agent(ids[0]).expect("alive");
    assert_ne!(agent.state, BehaviorState::Resting);
    assert!(agent.energy() > 75.0);
}

#[test]
fn test_hungry_agent_walks_to_food_and_eats() {
    let (mut world, ids) = WorldBuilder::new()
        .with_food_at(300.0, 300.0)
        .with_agent_where(280.0, 300.0, Sex::Female, |a| a.set_hunger(90.0))
        .build();

    world.update();
    assert_eq!(world.agent(ids[0]).expect("alive").state, BehaviorState::Eating);

    run(&mut world, 20);
    let agent = world.agent(ids[0]).expect("alive");
    assert!(agent.hunger() < 90.0);
    assert!(world.resources()[0].amount() < 100.0);
}

#[test]
fn test_time_scale_speeds_up_aging() {
    let (mut world, ids) = WorldBuilder::new()
        .without_food()
        .with_agent(100.0, 100.0, Sex::Male)
        .build();

    world.step(2.5);
    let age = world.agent(ids[0]).expect("alive").age;
    assert!((age - 2.5).abs() < 1e-9);

    world.step(f64::NAN);
    let age = world.agent(ids[0]).expect("alive").age;
    assert!((age - 3.5).abs() < 1e-9);
}

#[test]
fn test_crowding_raises_stress() {
    let (mut world, ids) = WorldBuilder::new()
        .without_food()
        .with_agent(100.0, 100.0, Sex::Male)
        .with_agent(110.0, 100.0, Sex::Male)
        .with_agent(100.0, 110.0, Sex::Male)
        .with_agent(600.0, 500.0, Sex::Female)
        .build();

    world.update();

    assert!(world.agent(ids[0]).expect("alive").stress() > 0.0);
    assert!(world.agent(ids[3]).expect("alive").stress().abs() < f64::EPSILON);
}

fn eating_at(x: f64, y: f64, hunger: f64) -> impl FnOnce(&mut utopia_data::Agent) {
    move |a| {
        a.set_hunger(hunger);
        a.state = BehaviorState::Eating;
        a.target = Some(utopia_data::Point::new(x, y));
    }
}

#[test]
fn test_arrived_eater_bites_before_final_pass() {
    let (mut world, ids) = WorldBuilder::new()
        .with_food_at(300.0, 300.0)
        .with_agent_where(300.0, 300.0, Sex::Female, eating_at(300.0, 300.0, 90.0))
        .build();

    world.update();

    let agent = world.agent(ids[0]).expect("alive");
    assert!((agent.hunger() - 50.2).abs() < 1e-9, "hunger {}", agent.hunger());
    assert!((world.resources()[0].amount() - 60.0).abs() < 1e-9);
}

#[test]
fn test_eater_sated_by_arrival_bite_leaves_same_tick() {
    let (mut world, ids) = WorldBuilder::new()
        .with_food_at(300.0, 300.0)
        .with_agent_where(300.0, 300.0, Sex::Male, eating_at(300.0, 300.0, 45.0))
        .build();

    world.update();

    let agent = world.agent(ids[0]).expect("alive");
    assert_ne!(agent.state, BehaviorState::Eating);
    assert!(agent.hunger() < 30.0);
}

#[test]
fn test_no_bite_at_exactly_consumption_range() {
    let resting = |hunger: f64| {
        move |a: &mut utopia_data::Agent| {
            a.set_hunger(hunger);
            a.set_energy(10.0);
            a.state = BehaviorState::Resting;
        }
    };
    let (mut world, ids) = WorldBuilder::new()
        .with_food_at(300.0, 300.0)
        .with_agent_where(305.0, 300.0, Sex::Female, resting(60.0))
        .with_agent_where(300.0, 304.9, Sex::Male, resting(60.0))
        .build();

    world.update();

    let edge = world.agent(ids[0]).expect("alive");
    assert!((edge.hunger() - 60.2).abs() < 1e-9, "hunger {}", edge.hunger());
    let inside = world.agent(ids[1]).expect("alive");
    assert!((inside.hunger() - 40.2).abs() < 1e-9, "hunger {}", inside.hunger());
    assert!((world.resources()[0].amount() - 80.0).abs() < 1e-9);
}

#[test]
fn test_courtship_abandoned_on_roll() {
    let (mut world, ids) = WorldBuilder::new()
        .with_config(|c| c.reproduction.abandon_chance = 1.0)
        .without_food()
        .with_agent_where(200.0, 200.0, Sex::Female, courting)
        .build();

    world.update();

    let agent = world.agent(ids[0]).expect("alive");
    assert_eq!(agent.state, BehaviorState::Exploring);
    assert!(agent.target.is_none());
}

#[test]
fn test_courtship_persists_without_abandonment() {
    let (mut world, ids) = WorldBuilder::new()
        .with_config(|c| c.reproduction.abandon_chance = 0.0)
        .without_food()
        .with_agent_where(200.0, 200.0, Sex::Female, courting)
        .build();

    run(&mut world, 30);

    assert_eq!(world.agent(ids[0]).expect("alive").state, BehaviorState::Mating);
}

#[test]
fn test_parent_energy_cost_scales_with_time() {
    let (mut world, ids) = WorldBuilder::new()
        .with_config(|c| {
            c.simulation.birth_rate = 1.0;
            c.simulation.time_scale = 2.5;
        })
        .without_food()
        .with_agent_where(200.0, 200.0, Sex::Male, courting)
        .with_agent_where(201.0, 200.0, Sex::Female, courting)
        .build();

    world.update();

    assert_population!(world, 3);
    for id in ids {
        let energy = world.agent(id).expect("parent alive").energy();
        assert!((energy - (100.0 - 0.1 * 2.5 - 10.0 * 2.5)).abs() < 1e-9, "energy {energy}");
    }
}
