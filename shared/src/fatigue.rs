/// Describes what an action costs in stamina
#[derive(Clone, Debug, PartialEq)]
pub struct FatigueSource {
    pub name: &'static str,
    pub cost: f32,
}

impl FatigueSource {
    pub const ATTACK: FatigueSource = FatigueSource::new("attack", 30.0);
    pub const BLOCK: FatigueSource = FatigueSource::new("block", 20.0);
    pub const DODGE: FatigueSource = FatigueSource::new("dodge", 25.0);
    pub const CLIMB: FatigueSource = FatigueSource::new("climb", 10.0);

    pub const fn new(name: &'static str, cost: f32) -> Self {
        Self { name, cost }
    }
}
