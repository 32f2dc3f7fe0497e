//! Name Registry
//!
//! Maps user-chosen names to legal, collision-free Java identifiers for the
//! duration of one pass.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Names generated code must never shadow: Java keywords and literals,
    /// plus builtins a block user is likely to type by accident.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let keywords = "abstract,assert,boolean,break,byte,case,catch,char,class,const,continue,\
            default,do,double,else,enum,extends,final,finally,float,for,goto,if,implements,\
            import,instanceof,int,interface,long,native,new,package,private,protected,public,\
            return,short,static,strictfp,super,switch,synchronized,this,throw,throws,transient,\
            try,void,volatile,while,var,record,yield";
        let literals = "false,null,true";
        let builtins = "abs,divmod,input,open,staticmethod,all,enumerate,ord,str,any,eval,\
            isinstance,pow,sum,basestring,execfile,issubclass,print,bin,file,iter,property,\
            tuple,bool,filter,len,range,type,bytearray,list,raw_input,unichr,callable,format,\
            locals,reduce,unicode,chr,frozenset,reload,vars,classmethod,getattr,map,repr,\
            xrange,cmp,globals,max,reversed,zip,compile,hasattr,memoryview,round,__import__,\
            complex,hash,min,set,apply,delattr,help,next,setattr,buffer,dict,hex,object,slice,\
            coerce,dir,id,oct,sorted,intern,equal,Math,System,String,Object,Var";
        [keywords, literals, builtins]
            .iter()
            .flat_map(|list| list.split(','))
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .collect()
    };

    static ref NON_WORD_RE: Regex = Regex::new(r"[^A-Za-z0-9_]").unwrap();
}

/// Disambiguation category for a logical name. The same user name may map
/// to different identifiers in different categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Variable,
    Procedure,
    Class,
}

#[derive(Debug, Clone)]
pub struct NameRegistry {
    reserved: HashSet<String>,
    db: HashMap<(String, NameKind), String>,
    /// Every identifier handed out this pass, regardless of kind.
    taken: HashSet<String>,
}

impl NameRegistry {
    pub fn new<I, S>(extra_reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut reserved: HashSet<String> =
            RESERVED_WORDS.iter().map(|word| word.to_string()).collect();
        reserved.extend(extra_reserved.into_iter().map(Into::into));
        NameRegistry {
            reserved,
            db: HashMap::new(),
            taken: HashSet::new(),
        }
    }

    /// Forget every mapping. Reserved words survive.
    pub fn reset(&mut self) {
        self.db.clear();
        self.taken.clear();
    }

    /// Identifier for `name` in category `kind`; stable for the rest of the pass.
    pub fn reserve(&mut self, name: &str, kind: NameKind) -> String {
        let key = (name.to_string(), kind);
        if let Some(existing) = self.db.get(&key) {
            return existing.clone();
        }
        let safe = self.distinct(name, kind);
        self.db.insert(key, safe.clone());
        safe
    }

    /// A fresh identifier derived from `name` that has never been issued.
    /// Not remembered under `name`, so every call yields a new identifier.
    pub fn distinct(&mut self, name: &str, _kind: NameKind) -> String {
        let safe = safe_name(name);
        let mut candidate = safe.clone();
        let mut suffix = 1;
        while self.taken.contains(&candidate) || self.reserved.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}{}", safe, suffix);
        }
        self.taken.insert(candidate.clone());
        candidate
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(word)
    }
}

/// Rewrite `name` into something shaped like a Java identifier.
pub fn safe_name(name: &str) -> String {
    if name.is_empty() {
        return "unnamed".to_string();
    }
    let mut safe = NON_WORD_RE.replace_all(&name.replace(' ', "_"), "_").into_owned();
    if safe.starts_with(|c: char| c.is_ascii_digit()) {
        safe.insert_str(0, "my_");
    }
    safe
}
