//! The embedded sample program used by `-c` (compile) and `-b` (benchmark).
//! Deliberately stays inside the grammar this parser actually implements:
//! declarations, an expression statement, and a return.

pub const EMBEDDED_SAMPLE: &str = r#"
int x = 42;
float y = 3.14;
string name = "sol";
bool flag = true;
int sum = x + 10 * 2;
bool check = sum > 50 && flag;
sum = sum + 1;
return sum;
"#;
