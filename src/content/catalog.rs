//! Constant tables: run results, Hoare proofs, panel text, tool list.
//!
//! Everything here is `'static` and read-only. The selector hands out
//! references into these tables; nothing ever copies or mutates them.

use serde::Serialize;

use super::HoareScenario;

/// One explored path of the symbolic run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathRecord {
    pub condition: &'static str,
    pub result: &'static str,
    pub constraints: &'static [&'static str],
}

/// Output of "Exécuter Symboliquement".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolicRunResult {
    pub paths: &'static [PathRecord],
}

/// One concrete execution of the concolic run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionRecord {
    pub input: &'static str,
    pub path: &'static str,
    pub output: i64,
    #[serde(rename = "newConstraints")]
    pub new_constraints: &'static [&'static str],
}

/// Output of "Exécuter en Mode Concolique".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcolicRunResult {
    pub executions: &'static [ExecutionRecord],
}

/// A Hoare triple with its hand-written proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoareResult {
    pub precondition: &'static str,
    pub code: &'static str,
    pub postcondition: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invariant: Option<&'static str>,
    pub proof: &'static [&'static str],
}

pub static SYMBOLIC_RUN: SymbolicRunResult = SymbolicRunResult {
    paths: &[
        PathRecord {
            condition: "x > 0 && y > 0",
            result: "x + y",
            constraints: &["x > 0", "y > 0"],
        },
        PathRecord {
            condition: "x > 0 && y ≤ 0",
            result: "x - y",
            constraints: &["x > 0", "y ≤ 0"],
        },
        PathRecord {
            condition: "x ≤ 0 && y > 0",
            result: "y - x",
            constraints: &["x ≤ 0", "y > 0"],
        },
        PathRecord {
            condition: "x ≤ 0 && y ≤ 0",
            result: "0",
            constraints: &["x ≤ 0", "y ≤ 0"],
        },
    ],
};

pub static CONCOLIC_RUN: ConcolicRunResult = ConcolicRunResult {
    executions: &[
        ExecutionRecord {
            input: "x=5, y=3",
            path: "x > 0 && y > 0",
            output: 8,
            new_constraints: &["x > 0", "y ≤ 0"],
        },
        ExecutionRecord {
            input: "x=5, y=-2",
            path: "x > 0 && y ≤ 0",
            output: 7,
            new_constraints: &["x ≤ 0", "y > 0"],
        },
        ExecutionRecord {
            input: "x=-3, y=4",
            path: "x ≤ 0 && y > 0",
            output: 7,
            new_constraints: &["x ≤ 0", "y ≤ 0"],
        },
        ExecutionRecord {
            input: "x=-2, y=-5",
            path: "x ≤ 0 && y ≤ 0",
            output: 0,
            new_constraints: &[],
        },
    ],
};

static HOARE_LINEAR: HoareResult = HoareResult {
    precondition: "{ x ≥ 0 }",
    code: "y = x + 5;\nz = y * 2;",
    postcondition: "{ z = 2x + 10 }",
    invariant: None,
    proof: &[
        "{ x ≥ 0 } // Précondition",
        "y = x + 5;",
        "{ y = x + 5 } // Substitution arrière",
        "z = y * 2;",
        "{ z = 2y = 2(x + 5) = 2x + 10 } // Postcondition",
        "✓ Preuve valide",
    ],
};

static HOARE_CONDITIONAL: HoareResult = HoareResult {
    precondition: "{ x ≥ 0 }",
    code: "if (x > 10) {\n  y = x - 10;\n} else {\n  y = x;\n}",
    postcondition: "{ y ≥ 0 && y ≤ x }",
    invariant: None,
    proof: &[
        "{ x ≥ 0 } // Précondition",
        "Branche 1: x > 10",
        "  { x ≥ 0 && x > 10 }",
        "  y = x - 10;",
        "  { y = x - 10 && x > 10 } ⟹ { y ≥ 0 && y ≤ x } ✓",
        "Branche 2: x ≤ 10",
        "  { x ≥ 0 && x ≤ 10 }",
        "  y = x;",
        "  { y = x && x ≥ 0 } ⟹ { y ≥ 0 && y ≤ x } ✓",
        "✓ Les deux branches valident la postcondition",
    ],
};

static HOARE_LOOP: HoareResult = HoareResult {
    precondition: "{ n ≥ 0 }",
    code: "sum = 0;\ni = 0;\nwhile (i < n) {\n  sum = sum + i;\n  i = i + 1;\n}",
    postcondition: "{ sum = n(n-1)/2 }",
    invariant: Some("{ sum = i(i-1)/2 && i ≤ n }"),
    proof: &[
        "{ n ≥ 0 } // Précondition",
        "sum = 0; i = 0;",
        "{ sum = 0 && i = 0 } ⟹ { sum = i(i-1)/2 } // Invariant initial",
        "while (i < n) {",
        "  { sum = i(i-1)/2 && i < n } // Invariant + garde",
        "  sum = sum + i;",
        "  { sum = i(i-1)/2 + i = i(i+1)/2 }",
        "  i = i + 1;",
        "  { sum = (i-1)i/2 = i(i-1)/2 } // Invariant préservé",
        "}",
        "{ sum = i(i-1)/2 && i ≥ n } ⟹ { sum = n(n-1)/2 } ✓",
        "✓ Invariant prouvé, postcondition valide",
    ],
};

/// Proof record for a scenario. Total over the closed enum.
pub fn hoare_result(scenario: HoareScenario) -> &'static HoareResult {
    match scenario {
        HoareScenario::Linear => &HOARE_LINEAR,
        HoareScenario::Conditional => &HOARE_CONDITIONAL,
        HoareScenario::Loop => &HOARE_LOOP,
    }
}

// ── Panel text ──

pub const TITLE: &str = "Vérification Formelle: Guide Pratique";
pub const SUBTITLE: &str = "Model Checking, Exécution Symbolique/Concolique, et Logique de Hoare";

pub const MODEL_CHECKING_DEFINITION: &str = "Technique automatique pour vérifier qu'un système satisfait des propriétés formelles.";
pub const MODEL_CHECKING_EXPLORATION: &str =
    "Le model checker explore tous les états possibles du système pour vérifier les propriétés.";
pub const MODEL_CHECKING_PROPERTY: &str = "Propriété: □(request → ◇grant)";
pub const MODEL_CHECKING_PROPERTY_GLOSS: &str = "\"Toute requête sera éventuellement accordée\"";

pub const SYMBOLIC_TRAITS: [&str; 4] = [
    "Utilise des symboles au lieu de valeurs concrètes",
    "Explore tous les chemins simultanément",
    "Génère des contraintes sur les symboles",
    "Problème: explosion des chemins",
];

pub const CONCOLIC_TRAITS: [&str; 4] = [
    "Combine exécution concrète et symbolique",
    "Commence avec des valeurs concrètes",
    "Génère des contraintes en parallèle",
    "Plus scalable, explore progressivement",
];

pub const SYMBOLIC_PROGRAM: &str = "\
int compute(int x, int y) {
  if (x > 0) {
    if (y > 0) {
      return x + y;
    } else {
      return x - y;
    }
  } else {
    if (y > 0) {
      return y - x;
    } else {
      return 0;
    }
  }
}";

pub const CONCOLIC_INTRO: &str = "L'exécution concolique commence avec des valeurs concrètes et explore progressivement les chemins.";

pub const CONCOLIC_PROGRAM: &str = "\
int compute(int x, int y) {
  // Démarre avec x=5, y=3
  if (x > 0) {      // true
    if (y > 0) {    // true, explore ensuite false
      return x + y;
    } ...
  }
}";

pub const CONCOLIC_ADVANTAGE: &str = "Exploration progressive et guidée par des valeurs concrètes, plus efficace pour les grands programmes.";

pub const NO_NEW_CONSTRAINTS: &str = "Aucune (tous les chemins explorés)";

pub const HOARE_TRIPLE: &str = "{P} C {Q}";
pub const HOARE_TRIPLE_GLOSS: &str = "Si la précondition P est vraie avant l'exécution de C, alors la postcondition Q sera vraie après.";

/// An external verification tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolEntry {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<&'static str>,
}

/// A titled group of tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub tools: &'static [ToolEntry],
}

pub static TOOL_CATEGORIES: [ToolCategory; 4] = [
    ToolCategory {
        id: "model-checkers",
        title: "Model Checkers",
        tools: &[
            ToolEntry {
                name: "SPIN",
                description: "Pour systèmes concurrents, langage Promela",
                command: Some("spin -a model.pml && gcc -o pan pan.c && ./pan"),
            },
            ToolEntry {
                name: "NuSMV / nuXmv",
                description: "Model checker symbolique, logique temporelle CTL/LTL",
                command: Some("NuSMV model.smv"),
            },
            ToolEntry {
                name: "TLA+",
                description: "Spécification de systèmes distribués",
                command: Some("java -jar tla2tools.jar Model.tla"),
            },
        ],
    },
    ToolCategory {
        id: "symbolic",
        title: "Exécution Symbolique",
        tools: &[
            ToolEntry {
                name: "KLEE",
                description: "Pour programmes C/C++, basé sur LLVM",
                command: Some("clang -emit-llvm -c program.c && klee program.bc"),
            },
            ToolEntry {
                name: "angr",
                description: "Framework Python pour analyse binaire",
                command: Some("pip install angr"),
            },
            ToolEntry {
                name: "Symbolic PathFinder (SPF)",
                description: "Pour programmes Java",
                command: None,
            },
        ],
    },
    ToolCategory {
        id: "concolic",
        title: "Exécution Concolique",
        tools: &[
            ToolEntry {
                name: "CUTE / DART",
                description: "Pionniers de l'exécution concolique",
                command: None,
            },
            ToolEntry {
                name: "SAGE (Microsoft)",
                description: "Fuzzing à grande échelle",
                command: None,
            },
            ToolEntry {
                name: "jCUTE / CATG",
                description: "Pour programmes Java",
                command: None,
            },
        ],
    },
    ToolCategory {
        id: "provers",
        title: "Prouveurs / Logique de Hoare",
        tools: &[
            ToolEntry {
                name: "Frama-C",
                description: "Framework pour analyse de code C avec WP (Weakest Precondition)",
                command: Some("frama-c -wp program.c"),
            },
            ToolEntry {
                name: "Dafny",
                description: "Langage avec vérification intégrée",
                command: Some("dafny /compile:0 program.dfy"),
            },
            ToolEntry {
                name: "Why3",
                description: "Plateforme de preuve déductive",
                command: Some("why3 prove program.mlw"),
            },
            ToolEntry {
                name: "Coq",
                description: "Assistant de preuve interactif",
                command: None,
            },
        ],
    },
];

pub const INSTALL_TITLE: &str = "Installation Recommandée";

pub const INSTALL_SCRIPT: &str = "\
# KLEE (Docker recommandé)
docker pull klee/klee
docker run --rm -ti klee/klee

# Frama-C
sudo apt-get install frama-c

# SPIN
sudo apt-get install spin

# Dafny
wget https://github.com/dafny-lang/dafny/releases/latest";
