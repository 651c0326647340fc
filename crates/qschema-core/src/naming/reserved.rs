use std::{collections::HashSet, sync::LazyLock};

// q built-in functions and verbs, including the aggregates
const VERBS: &[&str] = &[
    "abs", "acos", "aj", "aj0", "ajf", "ajf0", "all", "and", "any", "asc", "asin", "asof",
    "atan", "attr", "avg", "avgs", "bin", "binr", "ceiling", "cols", "cor", "cos", "count",
    "cov", "cross", "csv", "cut", "deltas", "desc", "dev", "differ", "distinct", "div",
    "dsave", "each", "ej", "ema", "enlist", "eval", "except", "exit", "exp", "fby", "fills",
    "first", "fkeys", "flip", "floor", "get", "getenv", "group", "gtime", "hclose", "hcount",
    "hdel", "hopen", "hsym", "iasc", "idesc", "ij", "ijf", "in", "insert", "inter", "inv",
    "key", "keys", "last", "like", "lj", "ljf", "load", "log", "lower", "lsq", "ltime",
    "ltrim", "mavg", "max", "maxs", "mcount", "md5", "mdev", "med", "meta", "min", "mins",
    "mmax", "mmin", "mmu", "mod", "msum", "neg", "next", "not", "null", "or", "over",
    "parse", "peach", "pj", "prd", "prds", "prev", "prior", "rand", "rank", "ratios", "raze",
    "read0", "read1", "reciprocal", "reval", "reverse", "rload", "rotate", "rsave", "rtrim",
    "save", "scan", "scov", "sdev", "set", "setenv", "show", "signum", "sin", "sqrt", "ss",
    "ssr", "string", "sublist", "sum", "sums", "sv", "svar", "system", "tables", "tan",
    "til", "trim", "type", "uj", "ujf", "ungroup", "union", "upper", "upsert", "value",
    "var", "view", "views", "vs", "wavg", "within", "wj", "wj1", "wsum", "ww", "xasc",
    "xbar", "xcol", "xcols", "xdesc", "xexp", "xgroup", "xkey", "xlog", "xprev", "xrank",
];

// qSQL and control keywords
const KEYWORDS: &[&str] = &[
    "by", "delete", "do", "exec", "from", "if", "select", "update", "where", "while",
];

///
/// TABLE_WORDS
/// built-in verbs a table name would shadow
///

static TABLE_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VERBS.iter().copied().collect());

///
/// COLUMN_WORDS
/// verbs and keywords, plus the virtual row-index column `i`
///

static COLUMN_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut words: HashSet<&'static str> = VERBS.iter().copied().collect();
    words.extend(KEYWORDS.iter().copied());
    words.insert("i");

    words
});

/// Check if a word is reserved for table names.
pub fn is_reserved_table_word(word: &str) -> bool {
    TABLE_WORDS.contains(word)
}

/// Check if a word is reserved for column names.
pub fn is_reserved_column_word(word: &str) -> bool {
    COLUMN_WORDS.contains(word)
}
