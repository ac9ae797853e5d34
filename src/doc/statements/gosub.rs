/*!
# `GOSUB <line number>`

## Purpose
Remember the line after this one and move execution to the specified line number.

## Remarks
`RETURN` resumes at the remembered line. Subroutines may nest.
When the `GOSUB` is on the last line, `RETURN` ends the program.
Only valid inside a running program.

## Example
```text
10 GOSUB 100
20 PRINT 2
90 END
100 PRINT 1
110 RETURN
RUN
1
2
```

*/
