pub mod bid_calc_model;
