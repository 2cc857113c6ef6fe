mod assert_utils;
