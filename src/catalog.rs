//! Static catalog of code examples.
//!
//! The catalog is defined once at compile time and never mutated. Order is
//! the display order. By naming convention a `+` prefix marks an example
//! that runs cleanly and `-` marks an intentionally broken one; nothing in
//! the record structure enforces this.

/// One named code snippet with a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRecord {
    /// Unique id, stable across the catalog's lifetime
    pub id: u32,
    /// Human-readable label, `+`/`-` prefixed by convention
    pub name: &'static str,
    /// Literal source text, never parsed here
    pub code: &'static str,
}

/// All examples, in display order.
pub static CATALOG: &[ExampleRecord] = &[
    ExampleRecord {
        id: 1,
        name: "+ Simple Hello World",
        code: "print(\"Hello, world!\")",
    },
    ExampleRecord {
        id: 2,
        name: "+ Variable Declaration and Usage",
        code: "x = 10\ny = 5\nresult = x + y\nprint(\"The result is:\", result)",
    },
    ExampleRecord {
        id: 19,
        name: "+ Sum of List Recursive Function",
        code: "def sum_list(lst):\n    if not lst:\n        return 0\n    else:\n        return lst[0] + sum_list(lst[1:])\n\nprint(sum_list([1, 2, 3, 4, 5]))",
    },
    ExampleRecord {
        id: 3,
        name: "+ For Loop",
        code: "for i in range(5):\n    print(i)",
    },
    ExampleRecord {
        id: 6,
        name: "+ While Loop",
        code: "i = 0\nwhile i < 5:\n    print(i)\n    i += 1",
    },
    ExampleRecord {
        id: 9,
        name: "+ 2D List Iteration",
        code: "m = [[1, 2, 3], [4, 5, 6], [7, 8, 9]]\nfor row in m:\n    for e in row:\n        print(e)",
    },
    ExampleRecord {
        id: 13,
        name: "+ Initialize 2D List",
        code: "m = [[0] * 3 for _ in range(3)]\nprint(m)",
    },
    ExampleRecord {
        id: 15,
        name: "+ Simple Recursive Function",
        code: "def factorial(n):\n    if n == 0:\n        return 1\n    else:\n        return n * factorial(n - 1)\n\nprint(factorial(5))",
    },
    ExampleRecord {
        id: 17,
        name: "+ Fibonacci Recursive Function",
        code: "def fibonacci(n):\n    if n <= 1:\n        return n\n    else:\n        return fibonacci(n - 1) + fibonacci(n - 2)\n\nprint(fibonacci(6))",
    },
    ExampleRecord {
        id: 100,
        name: "+ Mix",
        code: "def sum_list(l):\n    sum = 0\n    for x in l:\n        sum += x\n\n    return sum\n\n\ndef factorial(n):\n    if n == 0:\n        return 1\n    else:\n        return n * factorial(n - 1)\n\n\ndef fibonacci(n):\n    if n <= 1:\n        return n\n    else:\n        return fibonacci(n - 1) + fibonacci(n - 2)\nprint(\"Hello, world!\")\n\nx = 10\ny = 5\nresult = x + y\nprint(\"The result is:\", result)\n\n\n\nprint(sum_list([1, 2, 3, 4, 5]))\n\nfor i in range(5):\n    print(i)\n\ni = 0\nwhile i < 5:\n    print(i)\n    i += 1\n\nm = [[1, 2, 3], [4, 5, 6], [7, 8, 9]]\nfor r in m:\n    for e in r:\n        print(e)\n\nprint(factorial(5))\n\n\nprint(fibonacci(6))\n",
    },
    ExampleRecord {
        id: 4,
        name: "- For Loop; missing )",
        code: "for i in range(5:\n    print(i)",
    },
    ExampleRecord {
        id: 5,
        name: "- For Loop; variable mismatch",
        code: "for i in range(5):\n    print(j)",
    },
    ExampleRecord {
        id: 7,
        name: "- While Loop; missing declaration",
        code: "while i < 5:\n    print(i)",
    },
    ExampleRecord {
        id: 8,
        name: "- While Loop; missing argument block",
        code: "i = 0\nwhile :\n    i -= 1\n    print(i)",
    },
    ExampleRecord {
        id: 10,
        name: "- 2D List Iteration; missing inner loop",
        code: "m = [[1, 2, 3], [4, 5, 6], [7, 8, 9]]\nfor row in m:\n    print(e)",
    },
    ExampleRecord {
        id: 14,
        name: "- Initialize 2D List; syntax error",
        code: "m = [[0] * 3 for _ in range(3)\nprint(m)",
    },
    ExampleRecord {
        id: 16,
        name: "- Simple Recursive Function; missing base case",
        code: "def factorial(n):\n    return n * factorial(n - 1)\n\nprint(factorial(5))",
    },
    ExampleRecord {
        id: 18,
        name: "- Fibonacci Recursive Function; wrong base case",
        code: "def fibonacci(n):\n    if n == 1:\n        return n\n    else:\n        return fibonacci(n - 1) + fibonacci(n - 2)\n\nprint(fibonacci(6))",
    },
    ExampleRecord {
        id: 20,
        name: "- Sum of List Recursive Function; wrong slicing",
        code: "def sum_list(lst):\n    if not lst:\n        return 0\n    else:\n        return lst[0] + sum_list(lst)\n\nprint(sum_list([1, 2, 3, 4, 5]))",
    },
];

/// All catalog records in definition order.
pub fn all() -> &'static [ExampleRecord] {
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for record in all() {
            assert!(seen.insert(record.id), "duplicate id {}", record.id);
        }
    }

    #[test]
    fn test_code_is_non_empty() {
        for record in all() {
            assert!(!record.code.is_empty(), "empty code for id {}", record.id);
        }
    }

    #[test]
    fn test_names_follow_prefix_convention() {
        for record in all() {
            assert!(
                record.name.starts_with("+ ") || record.name.starts_with("- "),
                "name without +/- prefix: {:?}",
                record.name
            );
        }
    }

    #[test]
    fn test_catalog_is_non_empty_and_starts_with_hello_world() {
        // Display order is definition order; the hello world example leads.
        let first = all().first().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "+ Simple Hello World");
        assert_eq!(first.code, "print(\"Hello, world!\")");
    }
}
