mod schema_compiler_tests;
