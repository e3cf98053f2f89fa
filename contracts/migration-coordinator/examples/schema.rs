use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};
use migration_coordinator::msg::{
    ClaimResponse, ClaimsResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, MigrationRequest,
    QueryMsg,
};

use migration_core::coordinator::{ClaimSetup, ClaimStatus, Config, Organization};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(MigrationRequest), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(Config), &out_dir);
    export_schema(&schema_for!(Organization<String>), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
    export_schema(&schema_for!(ClaimSetup), &out_dir);
    export_schema(&schema_for!(ClaimStatus), &out_dir);
    export_schema(&schema_for!(ClaimResponse), &out_dir);
    export_schema(&schema_for!(ClaimsResponse), &out_dir);
}
