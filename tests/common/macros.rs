/// Asserts that the agent with the given ID is no longer in the world.
#[macro_export]
macro_rules! assert_agent_dead {
    ($world:expr, $id:expr) => {
        assert!(
            $world.agent($id).is_none(),
            "Agent {} should be dead but was found alive",
            $id
        );
    };
}

/// Asserts that the agent with the given ID is still in the world.
#[macro_export]
macro_rules! assert_agent_alive {
    ($world:expr, $id:expr) => {
        assert!(
            $world.agent($id).is_some(),
            "Agent {} should be alive but was not found",
            $id
        );
    };
}

/// Asserts that the population count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!(
            $world.population_count(),
            $count,
            "Population count mismatch"
        );
    };
}
