mod lcc_tests;
mod crs_tests;
mod transform_tests;
