use soroban_sdk::{Address, Env, IntoVal, Symbol};

// Calls into the primary token contract via invoke

/// Primary token balance of `id`
pub fn guitar_balance(env: &Env, guitar: &Address, id: &Address) -> i128 {
    env.invoke_contract::<i128>(
        guitar,
        &Symbol::new(env, "balance_of"),
        (id,).into_val(env),
    )
}

/// Transfer primary tokens out of `from`.
///
/// When `from` is the calling contract its authorization is implicit.
pub fn guitar_transfer(env: &Env, guitar: &Address, from: &Address, to: &Address, amount: i128) {
    env.invoke_contract::<()>(
        guitar,
        &Symbol::new(env, "transfer"),
        (from, to, amount).into_val(env),
    );
}
