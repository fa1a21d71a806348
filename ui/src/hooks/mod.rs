pub mod use_coin_table;
