/*!
# `NEW`

## Purpose
Erase the program in memory.

## Remarks
Variables and functions are kept.

## Example
```text
10 PRINT 1
X = 5
NEW
LIST
PRINT X
5
```

*/
