use alloy::{
    dyn_abi::Eip712Domain,
    primitives::{Address, B256},
    sol,
    sol_types::{eip712_domain, SolStruct},
};

use crate::eip712::Eip712;

/// Chain id the exchange uses for every L1 action signature, on both networks.
const L1_SIGNATURE_CHAIN_ID: u64 = 1337;

sol! {
    #[derive(Debug)]
    struct Agent {
        string source;
        bytes32 connectionId;
    }
}

impl Agent {
    pub(crate) fn for_action(connection_id: B256, is_mainnet: bool) -> Self {
        let source = if is_mainnet { "a" } else { "b" }.to_string();
        Agent {
            source,
            connectionId: connection_id,
        }
    }
}

impl Eip712 for Agent {
    fn domain(&self) -> Eip712Domain {
        eip712_domain! {
            name: "Exchange",
            version: "1",
            chain_id: L1_SIGNATURE_CHAIN_ID,
            verifying_contract: Address::ZERO,
        }
    }

    fn struct_hash(&self) -> B256 {
        self.eip712_hash_struct()
    }
}
