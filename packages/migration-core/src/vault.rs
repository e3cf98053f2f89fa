//! Execute interface of a treasury vault. Vault balances are read from the asset's own ledger
//! (see [`crate::asset::Asset::query_balance`])

pub mod msg {
    use cosmwasm_std::Uint128;
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};

    use crate::asset::Asset;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    pub enum ExecuteMsg {
        /// Send `amount` of `asset` held by the vault to `recipient`
        Transfer {
            asset: Asset,
            recipient: String,
            amount: Uint128,
        },
    }
}

pub mod helpers {
    use cosmwasm_std::{to_binary, Addr, CosmosMsg, StdResult, Uint128, WasmMsg};

    use super::msg::ExecuteMsg;
    use crate::asset::Asset;

    pub fn build_transfer_msg(
        vault_address: &Addr,
        asset: &Asset,
        recipient: &Addr,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: vault_address.to_string(),
            msg: to_binary(&ExecuteMsg::Transfer {
                asset: asset.clone(),
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }))
    }
}
