use soroban_sdk::{contracttype, Address, Env};
use token_ledger::storage::extend_instance_ttl;

/// Storage keys owned by the syrup bar; the ledger keys live in `token_ledger`
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Primary token contract address (Instance storage)
    Guitar,
}

pub fn get_guitar(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Guitar)
        .expect("Not initialized")
}

pub fn set_guitar(env: &Env, guitar: &Address) {
    env.storage().instance().set(&DataKey::Guitar, guitar);
    extend_instance_ttl(env);
}
