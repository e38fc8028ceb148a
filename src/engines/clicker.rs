//! Incremental counter engine behind Energy Clicker.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeKind
{
    /// Raises the energy gained per manual action.
    Action,
    /// Raises the energy gained per passive tick.
    Passive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upgrade
{
    pub id: u32,
    pub name: &'static str,
    pub cost: u64,
    pub power_delta: u64,
    pub kind: UpgradeKind,
    pub purchase_count: u32,
}

impl Upgrade
{
    const fn new(id: u32, name: &'static str, cost: u64, power_delta: u64, kind: UpgradeKind) -> Self
    {
        Self {
            id,
            name,
            cost,
            power_delta,
            kind,
            purchase_count: 0,
        }
    }
}

pub fn starter_upgrades() -> Vec<Upgrade>
{
    vec![
        Upgrade::new(1, "Better Mouse", 10, 1, UpgradeKind::Action),
        Upgrade::new(2, "Auto Clicker", 50, 1, UpgradeKind::Passive),
        Upgrade::new(3, "Super Processor", 250, 5, UpgradeKind::Passive),
        Upgrade::new(4, "Quantum Mouse", 1000, 25, UpgradeKind::Action),
    ]
}

#[derive(Clone, Debug)]
pub struct ClickerEngine
{
    total: u64,
    per_action_power: u64,
    per_tick_rate: u64,
    upgrades: Vec<Upgrade>,
}

impl Default for ClickerEngine
{
    fn default() -> Self
    {
        Self::new(starter_upgrades())
    }
}

impl ClickerEngine
{
    pub fn new(upgrades: Vec<Upgrade>) -> Self
    {
        Self {
            total: 0,
            per_action_power: 1,
            per_tick_rate: 0,
            upgrades,
        }
    }

    pub fn total(&self) -> u64
    {
        self.total
    }

    pub fn per_action_power(&self) -> u64
    {
        self.per_action_power
    }

    pub fn per_tick_rate(&self) -> u64
    {
        self.per_tick_rate
    }

    pub fn upgrades(&self) -> &[Upgrade]
    {
        &self.upgrades
    }

    pub fn upgrade(&self, id: u32) -> Option<&Upgrade>
    {
        self.upgrades.iter().find(|upgrade| upgrade.id == id)
    }

    pub fn perform_action(&mut self)
    {
        self.total = self.total.saturating_add(self.per_action_power);
    }

    /// One passive interval. Returns false while nothing is generated.
    pub fn tick(&mut self) -> bool
    {
        if self.per_tick_rate == 0 {
            return false;
        }
        self.total = self.total.saturating_add(self.per_tick_rate);
        true
    }

    pub fn affordable(&self, id: u32) -> bool
    {
        self.upgrade(id).is_some_and(|upgrade| self.total >= upgrade.cost)
    }

    /// Buys upgrade `id` when the total covers its cost.
    ///
    /// Unknown ids and short funds leave everything untouched.
    pub fn purchase(&mut self, id: u32) -> bool
    {
        let total = self.total;
        let Some(upgrade) = self
            .upgrades
            .iter_mut()
            .find(|upgrade| upgrade.id == id && total >= upgrade.cost)
        else {
            return false;
        };

        self.total -= upgrade.cost;
        upgrade.purchase_count += 1;
        upgrade.cost = upgrade.cost.saturating_mul(3) / 2;
        match upgrade.kind {
            UpgradeKind::Action => {
                self.per_action_power = self.per_action_power.saturating_add(upgrade.power_delta);
            }
            UpgradeKind::Passive => {
                self.per_tick_rate = self.per_tick_rate.saturating_add(upgrade.power_delta);
            }
        }

        tracing::info!(
            upgrade = upgrade.name,
            owned = upgrade.purchase_count,
            next_cost = upgrade.cost,
            total = self.total,
            "upgrade purchased"
        );
        true
    }
}
