//! Bundled catalog data.
//!
//! Arity, parameter shapes and defining owner are recorded as the reference
//! runtime reports them. Natively implemented operations with optional
//! arguments report arity -1 and a single anonymous rest parameter.
//! Raw lists deliberately keep some universal names (`to_s`, `==`, `new`, ...);
//! [`UNIVERSAL_EXCLUSIONS`] strips them when the catalog is built.

use super::{CategorySpec, OperationSpec};
use crate::types::{Category, ParamKind, ParamSpec};

const NONE: &[ParamSpec] = &[];
const REQ: &[ParamSpec] = &[ParamSpec::anon(ParamKind::Req)];
const REQ2: &[ParamSpec] = &[
    ParamSpec::anon(ParamKind::Req),
    ParamSpec::anon(ParamKind::Req),
];
const REST: &[ParamSpec] = &[ParamSpec::anon(ParamKind::Rest)];
const KEYS_ONLY: &[ParamSpec] = &[ParamSpec::named(ParamKind::Key, "random")];
const GLOB: &[ParamSpec] = &[
    ParamSpec::named(ParamKind::Req, "pattern"),
    ParamSpec::named(ParamKind::Opt, "_flags"),
    ParamSpec::named(ParamKind::Key, "flags"),
    ParamSpec::named(ParamKind::Key, "base"),
    ParamSpec::named(ParamKind::Key, "sort"),
];
const TIME_NOW: &[ParamSpec] = &[ParamSpec::named(ParamKind::Key, "in")];
const TIME_AT: &[ParamSpec] = &[
    ParamSpec::named(ParamKind::Req, "time"),
    ParamSpec::named(ParamKind::Opt, "subsec"),
    ParamSpec::named(ParamKind::Opt, "unit"),
    ParamSpec::named(ParamKind::Key, "in"),
];

const fn op(
    name: &'static str,
    arity: i32,
    parameters: &'static [ParamSpec],
    owner: &'static str,
) -> OperationSpec {
    OperationSpec {
        name,
        arity,
        parameters,
        owner,
    }
}

/// Names inherited from the base object model by every category.
pub static UNIVERSAL_EXCLUSIONS: &[&str] = &[
    // Object / Kernel / BasicObject
    "!", "!=", "!~", "<=>", "==", "===", "__id__", "__send__", "class", "clone",
    "define_singleton_method", "display", "dup", "enum_for", "eql?", "equal?", "extend",
    "freeze", "frozen?", "hash", "inspect", "instance_eval", "instance_exec", "instance_of?",
    "instance_variable_defined?", "instance_variable_get", "instance_variable_set",
    "instance_variables", "is_a?", "itself", "kind_of?", "method", "methods", "nil?",
    "object_id", "private_methods", "protected_methods", "public_method", "public_methods",
    "public_send", "remove_instance_variable", "respond_to?", "send", "singleton_class",
    "singleton_method", "singleton_methods", "tap", "then", "to_enum", "to_s", "yield_self",
    // Module
    "<", "<=", ">", ">=", "alias_method", "ancestors", "attr", "attr_accessor", "attr_reader",
    "attr_writer", "autoload", "autoload?", "class_eval", "class_exec",
    "class_variable_defined?", "class_variable_get", "class_variable_set", "class_variables",
    "const_defined?", "const_get", "const_missing", "const_set", "const_source_location",
    "constants", "define_method", "deprecate_constant", "include", "include?",
    "included_modules", "instance_method", "instance_methods", "method_defined?",
    "module_eval", "module_exec", "name", "prepend", "private_class_method",
    "private_constant", "private_instance_methods", "private_method_defined?",
    "protected_instance_methods", "protected_method_defined?", "public_class_method",
    "public_constant", "public_instance_method", "public_instance_methods",
    "public_method_defined?", "refinements", "remove_class_variable", "remove_method",
    "set_temporary_name", "singleton_class?", "undef_method", "undefined_instance_methods",
    // Class
    "allocate", "attached_object", "new", "subclasses", "superclass",
];

static ARRAY_INSTANCE: &[OperationSpec] = &[
    op("push", -1, REST, "Array"),
    op("append", -1, REST, "Array"),
    op("pop", -1, REST, "Array"),
    op("shift", -1, REST, "Array"),
    op("unshift", -1, REST, "Array"),
    op("prepend", -1, REST, "Array"),
    op("insert", -1, REST, "Array"),
    op("concat", -1, REST, "Array"),
    op("flatten", -1, REST, "Array"),
    op("flatten!", -1, REST, "Array"),
    op("compact", 0, NONE, "Array"),
    op("compact!", 0, NONE, "Array"),
    op("uniq", 0, NONE, "Array"),
    op("uniq!", 0, NONE, "Array"),
    op("reverse", 0, NONE, "Array"),
    op("rotate", -1, REST, "Array"),
    op("sort", 0, NONE, "Array"),
    op("sort!", 0, NONE, "Array"),
    op("sort_by!", 0, NONE, "Array"),
    op("shuffle", -1, KEYS_ONLY, "Array"),
    op("sample", -1, KEYS_ONLY, "Array"),
    op("first", -1, REST, "Array"),
    op("last", -1, REST, "Array"),
    op("take", 1, REQ, "Array"),
    op("drop", 1, REQ, "Array"),
    op("take_while", 0, NONE, "Array"),
    op("drop_while", 0, NONE, "Array"),
    op("map", 0, NONE, "Array"),
    op("map!", 0, NONE, "Array"),
    op("select", 0, NONE, "Array"),
    op("filter", 0, NONE, "Array"),
    op("reject", 0, NONE, "Array"),
    op("filter_map", 0, NONE, "Array"),
    op("zip", -1, REST, "Array"),
    op("product", -1, REST, "Array"),
    op("combination", 1, REQ, "Array"),
    op("permutation", -1, REST, "Array"),
    op("transpose", 0, NONE, "Array"),
    op("assoc", 1, REQ, "Array"),
    op("dig", -1, REST, "Array"),
    op("fill", -1, REST, "Array"),
    op("index", -1, REST, "Array"),
    op("find_index", -1, REST, "Array"),
    op("rindex", -1, REST, "Array"),
    op("count", -1, REST, "Array"),
    op("min", -1, REST, "Array"),
    op("max", -1, REST, "Array"),
    op("minmax", 0, NONE, "Array"),
    op("sum", -1, REST, "Array"),
    op("join", -1, REST, "Array"),
    op("pack", -1, REST, "Array"),
    op("bsearch", 0, NONE, "Array"),
    op("cycle", -1, REST, "Array"),
    op("delete", 1, REQ, "Array"),
    op("delete_at", 1, REQ, "Array"),
    op("delete_if", 0, NONE, "Array"),
    op("keep_if", 0, NONE, "Array"),
    op("any?", -1, REST, "Array"),
    op("all?", -1, REST, "Array"),
    op("none?", -1, REST, "Array"),
    op("one?", -1, REST, "Array"),
    op("empty?", 0, NONE, "Array"),
    op("length", 0, NONE, "Array"),
    op("size", 0, NONE, "Array"),
    op("values_at", -1, REST, "Array"),
    op("slice", -1, REST, "Array"),
    op("each", 0, NONE, "Array"),
    op("each_index", 0, NONE, "Array"),
    op("each_slice", 1, REQ, "Enumerable"),
    op("each_cons", 1, REQ, "Enumerable"),
    op("each_with_index", -1, REST, "Enumerable"),
    op("each_with_object", 1, REQ, "Enumerable"),
    op("flat_map", 0, NONE, "Enumerable"),
    op("tally", -1, REST, "Enumerable"),
    op("group_by", 0, NONE, "Enumerable"),
    op("partition", 0, NONE, "Enumerable"),
    op("chunk_while", 0, NONE, "Enumerable"),
    op("min_by", -1, REST, "Enumerable"),
    op("inject", -1, REST, "Enumerable"),
    op("reduce", -1, REST, "Enumerable"),
    op("to_h", 0, NONE, "Array"),
    op("include?", 1, REQ, "Array"),
    op("to_s", 0, NONE, "Array"),
    op("inspect", 0, NONE, "Array"),
    op("hash", 0, NONE, "Array"),
    op("==", 1, REQ, "Array"),
    op("<=>", 1, REQ, "Array"),
];

static ARRAY_CLASS: &[OperationSpec] = &[
    op("[]", -1, REST, "#<Class:Array>"),
    op("try_convert", 1, REQ, "#<Class:Array>"),
    op("new", -1, REST, "Class"),
];

static DIR_INSTANCE: &[OperationSpec] = &[
    op("path", 0, NONE, "Dir"),
    op("to_path", 0, NONE, "Dir"),
    op("read", 0, NONE, "Dir"),
    op("each", 0, NONE, "Dir"),
    op("children", 0, NONE, "Dir"),
    op("each_child", 0, NONE, "Dir"),
    op("close", 0, NONE, "Dir"),
    op("fileno", 0, NONE, "Dir"),
    op("tell", 0, NONE, "Dir"),
    op("pos", 0, NONE, "Dir"),
    op("seek", 1, REQ, "Dir"),
    op("rewind", 0, NONE, "Dir"),
    op("chdir", 0, NONE, "Dir"),
    op("inspect", 0, NONE, "Dir"),
];

static DIR_CLASS: &[OperationSpec] = &[
    op("pwd", 0, NONE, "#<Class:Dir>"),
    op("getwd", 0, NONE, "#<Class:Dir>"),
    op("chdir", -1, REST, "#<Class:Dir>"),
    op("mkdir", -1, REST, "#<Class:Dir>"),
    op("rmdir", 1, REQ, "#<Class:Dir>"),
    op("unlink", 1, REQ, "#<Class:Dir>"),
    op("delete", 1, REQ, "#<Class:Dir>"),
    op("exist?", 1, REQ, "#<Class:Dir>"),
    op("empty?", 1, REQ, "#<Class:Dir>"),
    op("entries", -1, REST, "#<Class:Dir>"),
    op("children", -1, REST, "#<Class:Dir>"),
    op("each_child", -1, REST, "#<Class:Dir>"),
    op("foreach", -1, REST, "#<Class:Dir>"),
    op("glob", -1, GLOB, "#<Class:Dir>"),
    op("[]", -1, REST, "#<Class:Dir>"),
    op("home", -1, REST, "#<Class:Dir>"),
    op("open", -1, REST, "#<Class:Dir>"),
    op("chroot", 1, REQ, "#<Class:Dir>"),
    op("for_fd", 1, REQ, "#<Class:Dir>"),
    op("new", -1, REST, "Class"),
];

static FILE_INSTANCE: &[OperationSpec] = &[
    op("path", 0, NONE, "File"),
    op("to_path", 0, NONE, "File"),
    op("size", 0, NONE, "File"),
    op("flock", 1, REQ, "File"),
    op("mtime", 0, NONE, "File"),
    op("atime", 0, NONE, "File"),
    op("ctime", 0, NONE, "File"),
    op("chmod", 1, REQ, "File"),
    op("chown", 2, REQ2, "File"),
    op("truncate", 1, REQ, "File"),
    op("lstat", 0, NONE, "File"),
    op("read", -1, REST, "IO"),
    op("write", -1, REST, "IO"),
    op("gets", -1, REST, "IO"),
    op("readline", -1, REST, "IO"),
    op("readlines", -1, REST, "IO"),
    op("each_line", -1, REST, "IO"),
    op("each_byte", 0, NONE, "IO"),
    op("puts", -1, REST, "IO"),
    op("print", -1, REST, "IO"),
    op("printf", -1, REST, "IO"),
    op("close", 0, NONE, "IO"),
    op("closed?", 0, NONE, "IO"),
    op("eof?", 0, NONE, "IO"),
    op("rewind", 0, NONE, "IO"),
    op("seek", -1, REST, "IO"),
    op("pos", 0, NONE, "IO"),
    op("lineno", 0, NONE, "IO"),
    op("sync", 0, NONE, "IO"),
    op("sync=", 1, REQ, "IO"),
    op("fileno", 0, NONE, "IO"),
    op("binmode", 0, NONE, "IO"),
    op("flush", 0, NONE, "IO"),
    op("fsync", 0, NONE, "IO"),
    op("inspect", 0, NONE, "IO"),
];

static FILE_CLASS: &[OperationSpec] = &[
    op("exist?", 1, REQ, "#<Class:File>"),
    op("file?", 1, REQ, "#<Class:File>"),
    op("directory?", 1, REQ, "#<Class:File>"),
    op("basename", -1, REST, "#<Class:File>"),
    op("dirname", -1, REST, "#<Class:File>"),
    op("extname", 1, REQ, "#<Class:File>"),
    op("join", -1, REST, "#<Class:File>"),
    op("split", 1, REQ, "#<Class:File>"),
    op("expand_path", -1, REST, "#<Class:File>"),
    op("absolute_path", -1, REST, "#<Class:File>"),
    op("absolute_path?", 1, REQ, "#<Class:File>"),
    op("size", 1, REQ, "#<Class:File>"),
    op("size?", 1, REQ, "#<Class:File>"),
    op("zero?", 1, REQ, "#<Class:File>"),
    op("empty?", 1, REQ, "#<Class:File>"),
    op("mtime", 1, REQ, "#<Class:File>"),
    op("rename", 2, REQ2, "#<Class:File>"),
    op("delete", -1, REST, "#<Class:File>"),
    op("unlink", -1, REST, "#<Class:File>"),
    op("symlink", 2, REQ2, "#<Class:File>"),
    op("symlink?", 1, REQ, "#<Class:File>"),
    op("readable?", 1, REQ, "#<Class:File>"),
    op("writable?", 1, REQ, "#<Class:File>"),
    op("executable?", 1, REQ, "#<Class:File>"),
    op("fnmatch", -1, REST, "#<Class:File>"),
    op("ftype", 1, REQ, "#<Class:File>"),
    op("read", -1, REST, "#<Class:IO>"),
    op("write", -1, REST, "#<Class:IO>"),
    op("readlines", -1, REST, "#<Class:IO>"),
    op("foreach", -1, REST, "#<Class:IO>"),
    op("binread", -1, REST, "#<Class:IO>"),
    op("open", -1, REST, "#<Class:IO>"),
    op("pipe", -1, REST, "#<Class:IO>"),
    op("popen", -1, REST, "#<Class:IO>"),
    op("new", -1, REST, "Class"),
];

static HASH_INSTANCE: &[OperationSpec] = &[
    op("fetch", -1, REST, "Hash"),
    op("store", 2, REQ2, "Hash"),
    op("key?", 1, REQ, "Hash"),
    op("has_key?", 1, REQ, "Hash"),
    op("member?", 1, REQ, "Hash"),
    op("value?", 1, REQ, "Hash"),
    op("has_value?", 1, REQ, "Hash"),
    op("key", 1, REQ, "Hash"),
    op("keys", 0, NONE, "Hash"),
    op("values", 0, NONE, "Hash"),
    op("values_at", -1, REST, "Hash"),
    op("fetch_values", -1, REST, "Hash"),
    op("each_pair", 0, NONE, "Hash"),
    op("each_key", 0, NONE, "Hash"),
    op("each_value", 0, NONE, "Hash"),
    op("merge", -1, REST, "Hash"),
    op("merge!", -1, REST, "Hash"),
    op("update", -1, REST, "Hash"),
    op("transform_values", 0, NONE, "Hash"),
    op("transform_keys", -1, REST, "Hash"),
    op("select", 0, NONE, "Hash"),
    op("filter", 0, NONE, "Hash"),
    op("reject", 0, NONE, "Hash"),
    op("dig", -1, REST, "Hash"),
    op("to_a", 0, NONE, "Hash"),
    op("to_h", 0, NONE, "Hash"),
    op("any?", -1, REST, "Hash"),
    op("empty?", 0, NONE, "Hash"),
    op("delete", 1, REQ, "Hash"),
    op("delete_if", 0, NONE, "Hash"),
    op("keep_if", 0, NONE, "Hash"),
    op("compact", 0, NONE, "Hash"),
    op("invert", 0, NONE, "Hash"),
    op("default", -1, REST, "Hash"),
    op("default=", 1, REQ, "Hash"),
    op("compare_by_identity", 0, NONE, "Hash"),
    op("slice", -1, REST, "Hash"),
    op("except", -1, REST, "Hash"),
    op("filter_map", 0, NONE, "Enumerable"),
    op("group_by", 0, NONE, "Enumerable"),
    op("min_by", -1, REST, "Enumerable"),
    op("sum", -1, REST, "Enumerable"),
    op("sort_by", 0, NONE, "Enumerable"),
    op("each_with_object", 1, REQ, "Enumerable"),
    op("each_with_index", -1, REST, "Enumerable"),
    op("count", -1, REST, "Enumerable"),
    op("include?", 1, REQ, "Hash"),
    op("to_s", 0, NONE, "Hash"),
    op("==", 1, REQ, "Hash"),
];

static HASH_CLASS: &[OperationSpec] = &[
    op("[]", -1, REST, "#<Class:Hash>"),
    op("try_convert", 1, REQ, "#<Class:Hash>"),
    op("ruby2_keywords_hash?", 1, REQ, "#<Class:Hash>"),
    op("ruby2_keywords_hash", 1, REQ, "#<Class:Hash>"),
    op("new", -1, REST, "Class"),
];

static INTEGER_INSTANCE: &[OperationSpec] = &[
    op("times", 0, NONE, "Integer"),
    op("upto", 1, REQ, "Integer"),
    op("downto", 1, REQ, "Integer"),
    op("even?", 0, NONE, "Integer"),
    op("odd?", 0, NONE, "Integer"),
    op("zero?", 0, NONE, "Integer"),
    op("gcd", 1, REQ, "Integer"),
    op("lcm", 1, REQ, "Integer"),
    op("digits", -1, REST, "Integer"),
    op("pow", -1, REST, "Integer"),
    op("succ", 0, NONE, "Integer"),
    op("next", 0, NONE, "Integer"),
    op("pred", 0, NONE, "Integer"),
    op("bit_length", 0, NONE, "Integer"),
    op("abs", 0, NONE, "Integer"),
    op("ord", 0, NONE, "Integer"),
    op("chr", -1, REST, "Integer"),
    op("to_f", 0, NONE, "Integer"),
    op("to_r", 0, NONE, "Integer"),
    op("fdiv", 1, REQ, "Integer"),
    op("divmod", 1, REQ, "Integer"),
    op("floor", -1, REST, "Integer"),
    op("ceil", -1, REST, "Integer"),
    op("round", -1, REST, "Integer"),
    op("integer?", 0, NONE, "Integer"),
    op("allbits?", 1, REQ, "Integer"),
    op("anybits?", 1, REQ, "Integer"),
    op("nobits?", 1, REQ, "Integer"),
    op("+", 1, REQ, "Integer"),
    op("-", 1, REQ, "Integer"),
    op("*", 1, REQ, "Integer"),
    op("/", 1, REQ, "Integer"),
    op("%", 1, REQ, "Integer"),
    op("**", 1, REQ, "Integer"),
    op("positive?", 0, NONE, "Numeric"),
    op("negative?", 0, NONE, "Numeric"),
    op("nonzero?", 0, NONE, "Numeric"),
    op("step", -1, REST, "Numeric"),
    op("between?", 2, REQ2, "Comparable"),
    op("clamp", -1, REST, "Comparable"),
    op("<", 1, REQ, "Integer"),
    op("<=>", 1, REQ, "Integer"),
    op("to_s", -1, REST, "Integer"),
];

static INTEGER_CLASS: &[OperationSpec] = &[
    op("sqrt", 1, REQ, "#<Class:Integer>"),
    op("try_convert", 1, REQ, "#<Class:Integer>"),
];

static FLOAT_INSTANCE: &[OperationSpec] = &[
    op("nan?", 0, NONE, "Float"),
    op("infinite?", 0, NONE, "Float"),
    op("finite?", 0, NONE, "Float"),
    op("floor", -1, REST, "Float"),
    op("ceil", -1, REST, "Float"),
    op("round", -1, REST, "Float"),
    op("truncate", -1, REST, "Float"),
    op("rationalize", -1, REST, "Float"),
    op("next_float", 0, NONE, "Float"),
    op("prev_float", 0, NONE, "Float"),
    op("to_i", 0, NONE, "Float"),
    op("to_r", 0, NONE, "Float"),
    op("abs", 0, NONE, "Float"),
    op("divmod", 1, REQ, "Float"),
    op("fdiv", 1, REQ, "Float"),
    op("quo", 1, REQ, "Float"),
    op("coerce", 1, REQ, "Float"),
    op("positive?", 0, NONE, "Float"),
    op("negative?", 0, NONE, "Float"),
    op("zero?", 0, NONE, "Float"),
    op("step", -1, REST, "Numeric"),
    op("between?", 2, REQ2, "Comparable"),
    op("clamp", -1, REST, "Comparable"),
    op("to_s", 0, NONE, "Float"),
];

static RANDOM_INSTANCE: &[OperationSpec] = &[
    op("rand", -1, REST, "Random"),
    op("bytes", 1, REQ, "Random"),
    op("seed", 0, NONE, "Random"),
    op("random_number", -1, REST, "Random::Formatter"),
    op("hex", -1, REST, "Random::Formatter"),
    op("alphanumeric", -1, REST, "Random::Formatter"),
    op("==", 1, REQ, "Random"),
];

static RANDOM_CLASS: &[OperationSpec] = &[
    op("rand", -1, REST, "#<Class:Random>"),
    op("bytes", 1, REQ, "#<Class:Random>"),
    op("seed", 0, NONE, "#<Class:Random>"),
    op("new_seed", 0, NONE, "#<Class:Random>"),
    op("srand", -1, REST, "#<Class:Random>"),
    op("urandom", 1, REQ, "#<Class:Random>"),
    op("random_number", -1, REST, "Random::Formatter"),
    op("new", -1, REST, "Class"),
];

static RANGE_INSTANCE: &[OperationSpec] = &[
    op("first", -1, REST, "Range"),
    op("last", -1, REST, "Range"),
    op("min", -1, REST, "Range"),
    op("max", -1, REST, "Range"),
    op("minmax", 0, NONE, "Range"),
    op("sum", -1, REST, "Range"),
    op("step", -1, REST, "Range"),
    op("%", 1, REQ, "Range"),
    op("each", 0, NONE, "Range"),
    op("reverse_each", 0, NONE, "Range"),
    op("cover?", 1, REQ, "Range"),
    op("member?", 1, REQ, "Range"),
    op("begin", 0, NONE, "Range"),
    op("end", 0, NONE, "Range"),
    op("size", 0, NONE, "Range"),
    op("count", -1, REST, "Range"),
    op("to_a", 0, NONE, "Range"),
    op("entries", 0, NONE, "Range"),
    op("exclude_end?", 0, NONE, "Range"),
    op("overlap?", 1, REQ, "Range"),
    op("each_slice", 1, REQ, "Enumerable"),
    op("each_cons", 1, REQ, "Enumerable"),
    op("select", 0, NONE, "Enumerable"),
    op("map", 0, NONE, "Enumerable"),
    op("include?", 1, REQ, "Range"),
    op("===", 1, REQ, "Range"),
    op("inspect", 0, NONE, "Range"),
];

static RANGE_CLASS: &[OperationSpec] = &[op("new", -1, REST, "Class")];

static REGEXP_INSTANCE: &[OperationSpec] = &[
    op("match", -1, REST, "Regexp"),
    op("match?", -1, REST, "Regexp"),
    op("=~", 1, REQ, "Regexp"),
    op("~", 0, NONE, "Regexp"),
    op("source", 0, NONE, "Regexp"),
    op("options", 0, NONE, "Regexp"),
    op("names", 0, NONE, "Regexp"),
    op("named_captures", 0, NONE, "Regexp"),
    op("casefold?", 0, NONE, "Regexp"),
    op("encoding", 0, NONE, "Regexp"),
    op("fixed_encoding?", 0, NONE, "Regexp"),
    op("timeout", 0, NONE, "Regexp"),
    op("to_s", 0, NONE, "Regexp"),
    op("===", 1, REQ, "Regexp"),
];

static REGEXP_CLASS: &[OperationSpec] = &[
    op("escape", 1, REQ, "#<Class:Regexp>"),
    op("quote", 1, REQ, "#<Class:Regexp>"),
    op("union", -1, REST, "#<Class:Regexp>"),
    op("last_match", -1, REST, "#<Class:Regexp>"),
    op("try_convert", 1, REQ, "#<Class:Regexp>"),
    op("linear_time?", -1, REST, "#<Class:Regexp>"),
    op("timeout", 0, NONE, "#<Class:Regexp>"),
    op("timeout=", 1, REQ, "#<Class:Regexp>"),
    op("compile", -1, REST, "#<Class:Regexp>"),
    op("new", -1, REST, "Class"),
];

static STRING_INSTANCE: &[OperationSpec] = &[
    op("upcase", -1, REST, "String"),
    op("downcase", -1, REST, "String"),
    op("capitalize", -1, REST, "String"),
    op("swapcase", -1, REST, "String"),
    op("upcase!", -1, REST, "String"),
    op("downcase!", -1, REST, "String"),
    op("reverse", 0, NONE, "String"),
    op("strip", 0, NONE, "String"),
    op("lstrip", 0, NONE, "String"),
    op("rstrip", 0, NONE, "String"),
    op("chomp", -1, REST, "String"),
    op("chop", 0, NONE, "String"),
    op("chars", 0, NONE, "String"),
    op("bytes", 0, NONE, "String"),
    op("lines", -1, REST, "String"),
    op("split", -1, REST, "String"),
    op("gsub", -1, REST, "String"),
    op("gsub!", -1, REST, "String"),
    op("sub", -1, REST, "String"),
    op("sub!", -1, REST, "String"),
    op("tr", 2, REQ2, "String"),
    op("delete", -1, REST, "String"),
    op("squeeze", -1, REST, "String"),
    op("count", -1, REST, "String"),
    op("index", -1, REST, "String"),
    op("rindex", -1, REST, "String"),
    op("start_with?", -1, REST, "String"),
    op("end_with?", -1, REST, "String"),
    op("center", -1, REST, "String"),
    op("ljust", -1, REST, "String"),
    op("rjust", -1, REST, "String"),
    op("each_char", 0, NONE, "String"),
    op("each_line", -1, REST, "String"),
    op("scan", 1, REQ, "String"),
    op("slice", -1, REST, "String"),
    op("empty?", 0, NONE, "String"),
    op("length", 0, NONE, "String"),
    op("size", 0, NONE, "String"),
    op("to_i", -1, REST, "String"),
    op("to_sym", 0, NONE, "String"),
    op("ord", 0, NONE, "String"),
    op("succ", 0, NONE, "String"),
    op("unpack1", -1, REST, "String"),
    op("encoding", 0, NONE, "String"),
    op("force_encoding", 1, REQ, "String"),
    op("valid_encoding?", 0, NONE, "String"),
    op("ascii_only?", 0, NONE, "String"),
    op("unicode_normalize", -1, REST, "String"),
    op("casecmp?", 1, REQ, "String"),
    op("partition", 1, REQ, "String"),
    op("insert", 2, REQ2, "String"),
    op("replace", 1, REQ, "String"),
    op("hex", 0, NONE, "String"),
    op("oct", 0, NONE, "String"),
    op("between?", 2, REQ2, "Comparable"),
    op("clamp", -1, REST, "Comparable"),
    op("prepend", -1, REST, "String"),
    op("include?", 1, REQ, "String"),
    op("to_s", 0, NONE, "String"),
    op("hash", 0, NONE, "String"),
];

static STRING_CLASS: &[OperationSpec] = &[
    op("try_convert", 1, REQ, "#<Class:String>"),
    op("new", -1, REST, "#<Class:String>"),
];

static SYMBOL_INSTANCE: &[OperationSpec] = &[
    op("to_proc", 0, NONE, "Symbol"),
    op("length", 0, NONE, "Symbol"),
    op("size", 0, NONE, "Symbol"),
    op("upcase", -1, REST, "Symbol"),
    op("downcase", -1, REST, "Symbol"),
    op("capitalize", -1, REST, "Symbol"),
    op("swapcase", -1, REST, "Symbol"),
    op("succ", 0, NONE, "Symbol"),
    op("start_with?", -1, REST, "Symbol"),
    op("end_with?", -1, REST, "Symbol"),
    op("empty?", 0, NONE, "Symbol"),
    op("to_sym", 0, NONE, "Symbol"),
    op("id2name", 0, NONE, "Symbol"),
    op("encoding", 0, NONE, "Symbol"),
    op("match?", -1, REST, "Symbol"),
    op("casecmp", 1, REQ, "Symbol"),
    op("[]", -1, REST, "Symbol"),
    op("between?", 2, REQ2, "Comparable"),
    op("name", 0, NONE, "Symbol"),
    op("to_s", 0, NONE, "Symbol"),
];

static SYMBOL_CLASS: &[OperationSpec] = &[op("all_symbols", 0, NONE, "#<Class:Symbol>")];

static THREAD_INSTANCE: &[OperationSpec] = &[
    op("join", -1, REST, "Thread"),
    op("value", 0, NONE, "Thread"),
    op("alive?", 0, NONE, "Thread"),
    op("status", 0, NONE, "Thread"),
    op("stop?", 0, NONE, "Thread"),
    op("kill", 0, NONE, "Thread"),
    op("exit", 0, NONE, "Thread"),
    op("terminate", 0, NONE, "Thread"),
    op("wakeup", 0, NONE, "Thread"),
    op("run", 0, NONE, "Thread"),
    op("priority", 0, NONE, "Thread"),
    op("priority=", 1, REQ, "Thread"),
    op("abort_on_exception", 0, NONE, "Thread"),
    op("report_on_exception", 0, NONE, "Thread"),
    op("thread_variable_get", 1, REQ, "Thread"),
    op("thread_variable_set", 2, REQ2, "Thread"),
    op("key?", 1, REQ, "Thread"),
    op("keys", 0, NONE, "Thread"),
    op("fetch", -1, REST, "Thread"),
    op("backtrace", -1, REST, "Thread"),
    op("native_thread_id", 0, NONE, "Thread"),
    op("group", 0, NONE, "Thread"),
    op("pending_interrupt?", -1, REST, "Thread"),
    op("raise", -1, REST, "Thread"),
    op("name", 0, NONE, "Thread"),
    op("inspect", 0, NONE, "Thread"),
];

static THREAD_CLASS: &[OperationSpec] = &[
    op("current", 0, NONE, "#<Class:Thread>"),
    op("main", 0, NONE, "#<Class:Thread>"),
    op("list", 0, NONE, "#<Class:Thread>"),
    op("pass", 0, NONE, "#<Class:Thread>"),
    op("start", -1, REST, "#<Class:Thread>"),
    op("fork", -1, REST, "#<Class:Thread>"),
    op("stop", 0, NONE, "#<Class:Thread>"),
    op("kill", 1, REQ, "#<Class:Thread>"),
    op("exit", 0, NONE, "#<Class:Thread>"),
    op("abort_on_exception", 0, NONE, "#<Class:Thread>"),
    op("report_on_exception", 0, NONE, "#<Class:Thread>"),
    op("handle_interrupt", 1, REQ, "#<Class:Thread>"),
    op("pending_interrupt?", -1, REST, "#<Class:Thread>"),
    op("new", -1, REST, "#<Class:Thread>"),
];

static TIME_INSTANCE: &[OperationSpec] = &[
    op("year", 0, NONE, "Time"),
    op("month", 0, NONE, "Time"),
    op("mon", 0, NONE, "Time"),
    op("day", 0, NONE, "Time"),
    op("mday", 0, NONE, "Time"),
    op("hour", 0, NONE, "Time"),
    op("min", 0, NONE, "Time"),
    op("sec", 0, NONE, "Time"),
    op("usec", 0, NONE, "Time"),
    op("nsec", 0, NONE, "Time"),
    op("wday", 0, NONE, "Time"),
    op("yday", 0, NONE, "Time"),
    op("zone", 0, NONE, "Time"),
    op("strftime", 1, REQ, "Time"),
    op("to_i", 0, NONE, "Time"),
    op("to_f", 0, NONE, "Time"),
    op("to_a", 0, NONE, "Time"),
    op("monday?", 0, NONE, "Time"),
    op("sunday?", 0, NONE, "Time"),
    op("saturday?", 0, NONE, "Time"),
    op("utc", 0, NONE, "Time"),
    op("utc?", 0, NONE, "Time"),
    op("localtime", -1, REST, "Time"),
    op("gmtime", 0, NONE, "Time"),
    op("getutc", 0, NONE, "Time"),
    op("round", -1, REST, "Time"),
    op("floor", -1, REST, "Time"),
    op("ceil", -1, REST, "Time"),
    op("dst?", 0, NONE, "Time"),
    op("+", 1, REQ, "Time"),
    op("-", 1, REQ, "Time"),
    op("between?", 2, REQ2, "Comparable"),
    op("clamp", -1, REST, "Comparable"),
    op("<=>", 1, REQ, "Time"),
    op("inspect", 0, NONE, "Time"),
];

static TIME_CLASS: &[OperationSpec] = &[
    op("now", -1, TIME_NOW, "#<Class:Time>"),
    op("at", -1, TIME_AT, "#<Class:Time>"),
    op("mktime", -1, REST, "#<Class:Time>"),
    op("local", -1, REST, "#<Class:Time>"),
    op("gm", -1, REST, "#<Class:Time>"),
    op("utc", -1, REST, "#<Class:Time>"),
    op("new", -1, REST, "Class"),
];

pub static BUILTIN_CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        category: Category::Array,
        instance: ARRAY_INSTANCE,
        category_level: ARRAY_CLASS,
    },
    CategorySpec {
        category: Category::Dir,
        instance: DIR_INSTANCE,
        category_level: DIR_CLASS,
    },
    CategorySpec {
        category: Category::File,
        instance: FILE_INSTANCE,
        category_level: FILE_CLASS,
    },
    CategorySpec {
        category: Category::Hash,
        instance: HASH_INSTANCE,
        category_level: HASH_CLASS,
    },
    CategorySpec {
        category: Category::Integer,
        instance: INTEGER_INSTANCE,
        category_level: INTEGER_CLASS,
    },
    CategorySpec {
        category: Category::Float,
        instance: FLOAT_INSTANCE,
        category_level: &[],
    },
    CategorySpec {
        category: Category::Random,
        instance: RANDOM_INSTANCE,
        category_level: RANDOM_CLASS,
    },
    CategorySpec {
        category: Category::Range,
        instance: RANGE_INSTANCE,
        category_level: RANGE_CLASS,
    },
    CategorySpec {
        category: Category::Regexp,
        instance: REGEXP_INSTANCE,
        category_level: REGEXP_CLASS,
    },
    CategorySpec {
        category: Category::String,
        instance: STRING_INSTANCE,
        category_level: STRING_CLASS,
    },
    CategorySpec {
        category: Category::Symbol,
        instance: SYMBOL_INSTANCE,
        category_level: SYMBOL_CLASS,
    },
    CategorySpec {
        category: Category::Thread,
        instance: THREAD_INSTANCE,
        category_level: THREAD_CLASS,
    },
    CategorySpec {
        category: Category::Time,
        instance: TIME_INSTANCE,
        category_level: TIME_CLASS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_names_per_list() {
        for spec in BUILTIN_CATEGORIES {
            for list in [spec.instance, spec.category_level] {
                let mut seen = HashSet::new();
                for op in list {
                    assert!(
                        seen.insert(op.name),
                        "{} lists {} twice",
                        spec.category,
                        op.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_arity_matches_required_params() {
        for spec in BUILTIN_CATEGORIES {
            for op in spec.instance.iter().chain(spec.category_level) {
                if op.arity >= 0 {
                    let required = op
                        .parameters
                        .iter()
                        .filter(|p| p.kind == ParamKind::Req)
                        .count();
                    assert_eq!(
                        required as i32, op.arity,
                        "{}#{} arity/parameters disagree",
                        spec.category, op.name
                    );
                }
            }
        }
    }
}
