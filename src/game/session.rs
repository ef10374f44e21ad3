use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::belt::{Belt, Customer, RandomCustomer};
use crate::chef::Chef;
use crate::error::Result;
use crate::game::config::GameConfig;
use crate::models::{ChefId, Plate};
use crate::policy::{AutoChef, Strategy};
use crate::pricing::{to_cents, OPPONENT_NAMES};

/// One belt, its seated customers, the player and the opponent chefs.
pub struct SushiGame {
    belt: Belt,
    customers: Vec<Rc<dyn Customer>>,
    player: Rc<Chef>,
    opponents: Vec<Rc<Chef>>,
    strategies: Vec<(ChefId, Strategy)>,
    rng: StdRng,
}

impl SushiGame {
    /// A session with no automated opponents, seeded from OS entropy.
    pub fn new(belt_size: usize, num_customers: usize, num_opponents: usize) -> Result<Self> {
        Self::from_config(&GameConfig {
            belt_size,
            customers: num_customers,
            opponents: num_opponents,
            autopilot: false,
            ..GameConfig::default()
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Customers are spread evenly; each gets its own pickiness and RNG stream.
        let mut customers: Vec<Rc<dyn Customer>> = Vec::with_capacity(config.customers);
        let mut seats = Vec::with_capacity(config.customers);
        if config.customers > 0 {
            let spacing = config.belt_size / config.customers;
            for i in 0..config.customers {
                let pickiness = rng.r#gen::<f64>();
                let customer: Rc<dyn Customer> =
                    Rc::new(RandomCustomer::seeded(pickiness, rng.r#gen())?);
                seats.push(((i * spacing) as i64, Rc::clone(&customer)));
                customers.push(customer);
            }
        }
        let mut belt = Belt::with_customers(config.belt_size, seats)?;

        let opponents = (0..config.opponents)
            .map(|i| Chef::join(&mut belt, format!("Opponent Chef {}", i), config.starting_balance))
            .collect::<Result<Vec<_>>>()?;
        let player = Chef::join(&mut belt, "Player", config.starting_balance)?;

        let mut game = Self {
            belt,
            customers,
            player,
            opponents,
            strategies: Vec::new(),
            rng,
        };
        if config.autopilot {
            game.attach_autopilots();
        }

        info!(
            belt_size = config.belt_size,
            customers = config.customers,
            opponents = config.opponents,
            autopilot = config.autopilot,
            "session ready"
        );
        Ok(game)
    }

    /// Give every opponent a random strategy and a name to match.
    ///
    /// Does nothing if autopilots are already attached.
    pub fn attach_autopilots(&mut self) {
        if !self.strategies.is_empty() {
            return;
        }
        for chef in &self.opponents {
            let strategy = Strategy::from_draw(self.rng.r#gen());
            let first_name = OPPONENT_NAMES[self.rng.gen_range(0..OPPONENT_NAMES.len())];
            chef.set_name(format!("{} {}", strategy.label(), first_name));

            let policy = AutoChef::new(
                Rc::clone(chef),
                strategy,
                StdRng::seed_from_u64(self.rng.r#gen()),
            );
            self.belt.register_belt_observer(Rc::new(policy));
            self.strategies.push((chef.id(), strategy));
        }
    }

    pub fn belt(&self) -> &Belt {
        &self.belt
    }

    pub fn belt_mut(&mut self) -> &mut Belt {
        &mut self.belt
    }

    pub fn customers(&self) -> &[Rc<dyn Customer>] {
        &self.customers
    }

    pub fn player(&self) -> &Rc<Chef> {
        &self.player
    }

    pub fn opponents(&self) -> &[Rc<Chef>] {
        &self.opponents
    }

    /// Strategy driving an opponent, if autopilots are attached.
    pub fn strategy_of(&self, chef: ChefId) -> Option<Strategy> {
        self.strategies
            .iter()
            .find(|(id, _)| *id == chef)
            .map(|(_, s)| *s)
    }

    /// Opponents first, then the player.
    pub fn chefs(&self) -> impl Iterator<Item = &Rc<Chef>> {
        self.opponents.iter().chain(std::iter::once(&self.player))
    }

    /// Let the player place a plate.
    pub fn place_player_plate(&mut self, plate: Rc<Plate>, position: i64) -> Result<usize> {
        let player = Rc::clone(&self.player);
        player.make_and_place_plate(&mut self.belt, plate, position)
    }

    pub fn rotate(&mut self) {
        self.belt.rotate();
    }

    /// All chefs, richest first, compared to the cent. Ties keep `chefs()` order.
    pub fn scoreboard(&self) -> Vec<Rc<Chef>> {
        let mut board: Vec<Rc<Chef>> = self.chefs().cloned().collect();
        board.sort_by_key(|c| std::cmp::Reverse(to_cents(c.balance())));
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SushiError;

    #[test]
    fn test_construction_rules() {
        assert!(matches!(
            SushiGame::new(0, 0, 0),
            Err(SushiError::InvalidConstruction(_))
        ));
        assert!(matches!(
            SushiGame::new(3, 4, 0),
            Err(SushiError::InvalidConstruction(_))
        ));
        assert!(SushiGame::new(4, 4, 0).is_ok());
        assert!(SushiGame::new(1, 0, 0).is_ok());
    }

    #[test]
    fn test_customers_evenly_spaced() {
        let game = SushiGame::new(10, 3, 0).unwrap();
        // 10 / 3 = 3 slots apart
        for pos in [0, 3, 6] {
            assert!(game.belt().customer_at_position(pos).is_some());
        }
        let seated = (0..10)
            .filter(|&p| game.belt().customer_at_position(p).is_some())
            .count();
        assert_eq!(seated, 3);
        assert_eq!(game.customers().len(), 3);
    }

    #[test]
    fn test_attach_autopilots_renames_once() {
        let config = GameConfig {
            belt_size: 6,
            customers: 2,
            opponents: 3,
            seed: Some(1),
            autopilot: false,
            ..GameConfig::default()
        };
        let mut game = SushiGame::from_config(&config).unwrap();
        let observers_before = game.belt().observer_count();
        game.attach_autopilots();
        game.attach_autopilots();
        assert_eq!(game.belt().observer_count(), observers_before + 3);

        for chef in game.opponents() {
            let strategy = game.strategy_of(chef.id()).unwrap();
            assert!(chef.name().starts_with(strategy.label()));
        }
        assert!(game.strategy_of(game.player().id()).is_none());
    }
}
