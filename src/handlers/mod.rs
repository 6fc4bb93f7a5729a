pub mod wallets;

pub use wallets::{
    create_wallet, delete_user_wallets, get_user_wallets, get_wallet, list_wallets, update_wallet,
    ListWalletsQuery, UpdateWalletResponse,
};
