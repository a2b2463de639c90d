mod reprojector_tests;
