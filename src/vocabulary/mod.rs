//! The BagCAT vocabulary.
//!
//! A fixed, versioned set of classes and properties, modelled on the W3C Data
//! Catalog Vocabulary (<https://www.w3.org/TR/vocab-dcat/>) and extended with
//! bag-file specific terms. Every fact the catalog writes uses these
//! identifiers; renaming one orphans every fragment that already mentions it.

/// Namespace IRI prefix.
pub const NS: &str = "http://www.w3.org/ns/bagcat#";

/// Prefix used when serializing fragments.
pub const PREFIX: &str = "bagcat";

/// Vocabulary version. Bump when a term is added; never reuse a removed name.
pub const VERSION: u32 = 1;

/// Whether a term names a class or a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Class,
    Property,
}

macro_rules! bagcat_terms {
    ($($variant:ident => ($local:literal, $kind:ident)),+ $(,)?) => {
        /// A BagCAT vocabulary term.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum BagCat {
            $($variant),+
        }

        impl BagCat {
            /// Every term, classes first.
            pub const ALL: &'static [BagCat] = &[$(BagCat::$variant),+];

            /// Full IRI of the term.
            pub const fn iri(self) -> &'static str {
                match self {
                    $(BagCat::$variant => concat!("http://www.w3.org/ns/bagcat#", $local)),+
                }
            }

            /// Local name, i.e. the IRI without the namespace.
            pub const fn local_name(self) -> &'static str {
                match self {
                    $(BagCat::$variant => $local),+
                }
            }

            pub const fn kind(self) -> TermKind {
                match self {
                    $(BagCat::$variant => TermKind::$kind),+
                }
            }
        }
    };
}

bagcat_terms! {
    // Classes (DCAT)
    Catalog => ("Catalog", Class),
    CatalogRecord => ("CatalogRecord", Class),
    Dataset => ("Dataset", Class),
    Distribution => ("Distribution", Class),
    // Classes (bag files)
    BagFile => ("BagFile", Class),
    BagFileTopic => ("BagFileTopic", Class),
    BagFileType => ("BagFileType", Class),

    // Properties (DCAT)
    AccessUrl => ("accessURL", Property),
    ByteSize => ("byteSize", Property),
    ContactPoint => ("contactPoint", Property),
    DatasetProp => ("dataset", Property),
    DistributionProp => ("distribution", Property),
    DownloadUrl => ("downloadURL", Property),
    Keyword => ("keyword", Property),
    LandingPage => ("landingPage", Property),
    MediaType => ("mediaType", Property),
    Record => ("record", Property),
    Theme => ("theme", Property),
    ThemeTaxonomy => ("themeTaxonomy", Property),

    // Properties (bag files)
    Name => ("name", Property),
    Filename => ("filename", Property),
    Version => ("version", Property),
    Compression => ("compression", Property),
    Duration => ("duration", Property),
    Start => ("start", Property),
    End => ("end", Property),
    SizeInMb => ("sizeInMB", Property),
    NrOfMessages => ("nrOfMessages", Property),
    AvailableInBagCatalog => ("availableInBagCatalog", Property),
    AvailableInBagFile => ("topicAvailableInBagFile", Property),
    TopicName => ("topicName", Property),
    PackageName => ("packageName", Property),
    Md5 => ("md5", Property),
    NrOfConnections => ("nrOfConnections", Property),
    MessageType => ("messageType", Property),
}

impl BagCat {
    /// Looks a term up by its local name (case-sensitive, as IRIs are).
    pub fn lookup(local_name: &str) -> Option<BagCat> {
        Self::ALL.iter().copied().find(|term| term.local_name() == local_name)
    }

    /// Looks a term up by its full IRI.
    pub fn from_iri(iri: &str) -> Option<BagCat> {
        iri.strip_prefix(NS).and_then(Self::lookup)
    }

    pub fn classes() -> impl Iterator<Item = BagCat> {
        Self::ALL.iter().copied().filter(|term| term.kind() == TermKind::Class)
    }

    pub fn properties() -> impl Iterator<Item = BagCat> {
        Self::ALL.iter().copied().filter(|term| term.kind() == TermKind::Property)
    }
}

impl std::fmt::Display for BagCat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", PREFIX, self.local_name())
    }
}

impl From<BagCat> for String {
    fn from(term: BagCat) -> Self {
        term.iri().to_string()
    }
}
