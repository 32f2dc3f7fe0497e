//! Runtime Support Declarations
//!
//! Java source for the declarations generated code may depend on: the
//! dynamic `Var` wrapper class and the value-to-string helper.

/// Desired name of the string conversion helper.
pub const TO_STRING_HELPER: &str = "blocklyToString";

/// Imports the string conversion helper needs.
pub const TO_STRING_IMPORTS: [&str; 2] = ["java.text.DecimalFormat", "java.text.NumberFormat"];

/// Formats floating point values with at most five decimals, whole numbers
/// as integers, and anything else as the `UNKNOWN` sentinel.
pub const TO_STRING_HELPER_LINES: &[&str] = &[
    "public static String {{FUNCTION_NAME}}(Object object) {",
    "    String result;",
    "    if (object instanceof String) {",
    "        result = (String) object;",
    "    } else if (object instanceof Double || object instanceof Float) {",
    "        NumberFormat formatter = new DecimalFormat(\"#.#####\");",
    "        result = formatter.format(((Number) object).doubleValue());",
    "    } else if (object instanceof Number) {",
    "        result = Long.toString(((Number) object).longValue());",
    "    } else {",
    "        result = \"UNKNOWN\";",
    "    }",
    "    return result;",
    "}",
];

pub const VAR_CLASS_LINES: &[&str] = &[
    "class Var {",
    "    private Object value;",
    "",
    "    public Var(Object value) {",
    "        set(value);",
    "    }",
    "",
    "    public Object get() {",
    "        return value;",
    "    }",
    "",
    "    public void set(Object value) {",
    "        this.value = value instanceof Var ? ((Var) value).get() : value;",
    "    }",
    "",
    "    public double getDouble() {",
    "        if (value instanceof Number) {",
    "            return ((Number) value).doubleValue();",
    "        }",
    "        if (value instanceof Boolean) {",
    "            return ((Boolean) value) ? 1 : 0;",
    "        }",
    "        try {",
    "            return Double.parseDouble(String.valueOf(value));",
    "        } catch (NumberFormatException ex) {",
    "            return 0;",
    "        }",
    "    }",
    "",
    "    @Override",
    "    public String toString() {",
    "        return String.valueOf(value);",
    "    }",
    "}",
];
